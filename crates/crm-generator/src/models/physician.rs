//! 模拟医生模型
//!
//! 用于测试环境的医生数据结构。所有记录都带有测试标记，
//! 避免被误认为真实的执业信息。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 执业编号的测试标记前缀
pub const TEST_MARKER_PREFIX: &str = "TEST-CRM-";

/// 记录类型标记，所有生成的记录恒为该值
pub const TEST_ONLY_TAG: &str = "TEST_ONLY";

/// 模拟医生
///
/// 字段顺序即输出顺序，序列化名称沿用下游测试数据使用的葡语字段名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicianRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "crm")]
    pub license_id: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "registro_tipo")]
    pub record_type: String,
    #[serde(rename = "gerado_em")]
    pub generated_on: NaiveDate,
}

impl PhysicianRecord {
    /// 输出字段（与序列化名称及顺序一致）
    ///
    /// CSV 表头直接取自该列表，与是否存在记录无关
    pub const FIELDS: [&'static str; 8] = [
        "nome",
        "crm",
        "estado",
        "especialidade",
        "email",
        "telefone",
        "registro_tipo",
        "gerado_em",
    ];

    /// 执业编号是否带有测试标记并指向本记录的州
    pub fn has_test_license(&self, prefix: &str) -> bool {
        let Some(rest) = self.license_id.strip_prefix(prefix) else {
            return false;
        };
        let Some((state, number)) = rest.rsplit_once('-') else {
            return false;
        };
        state == self.state && number.len() == 6 && number.bytes().all(|b| b.is_ascii_digit())
    }
}
