//! 生成词表
//!
//! 姓名、州代码与专科的固定候选列表。词表在启动时注入生成器，
//! 既可使用内置列表，也可从 JSON/YAML 文件加载以便测试替换。

use std::fs;
use std::path::Path;

use crm_shared::error::{CrmError, Result};
use serde::{Deserialize, Serialize};

const FIRST_NAMES: &[&str] = &[
    "Carlos", "Mariana", "João", "Ana", "Lucas", "Beatriz", "Pedro", "Fernanda", "Rafael",
    "Larissa", "Guilherme", "Camila", "Vinícius", "Isabela", "Mateus", "Marcos", "Juliana",
    "Thiago", "Marina", "Ricardo",
];

const LAST_NAMES: &[&str] = &[
    "Silva", "Souza", "Oliveira", "Santos", "Pereira", "Costa", "Rodrigues", "Almeida",
    "Nascimento", "Gomes", "Martins", "Araújo", "Barbosa", "Ribeiro",
];

const STATES: &[&str] = &[
    "SP", "RJ", "MG", "BA", "RS", "PR", "SC", "GO", "PE", "CE", "AM", "PA",
];

const SPECIALTIES: &[&str] = &[
    "Clínica Geral",
    "Pediatria",
    "Cardiologia",
    "Ortopedia",
    "Ginecologia",
    "Dermatologia",
    "Psiquiatria",
    "Endocrinologia",
    "Neurologia",
    "Oftalmologia",
    "Otorrinolaringologia",
    "Oncologia",
    "Gastroenterologia",
    "Urologia",
];

/// 生成词表
///
/// 创建后不可变；四个列表都不能为空，见 [`Vocabulary::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub states: Vec<String>,
    pub specialties: Vec<String>,
}

impl Default for Vocabulary {
    /// 内置词表：20 个名、14 个姓、12 个州、14 个专科
    fn default() -> Self {
        Self {
            first_names: owned(FIRST_NAMES),
            last_names: owned(LAST_NAMES),
            states: owned(STATES),
            specialties: owned(SPECIALTIES),
        }
    }
}

impl Vocabulary {
    /// 从 JSON 字符串解析词表
    pub fn from_json(json: &str) -> Result<Self> {
        let vocabulary: Self = serde_json::from_str(json)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// 从 YAML 字符串解析词表
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let vocabulary: Self = serde_yaml::from_str(yaml)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// 从文件加载词表
    ///
    /// 根据扩展名选择解析方式：`.yaml`/`.yml` 使用 YAML，其余按 JSON 解析
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CrmError::io(path, e))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// 校验所有列表非空
    pub fn validate(&self) -> Result<()> {
        let lists: [(&'static str, &[String]); 4] = [
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
            ("states", &self.states),
            ("specialties", &self.specialties),
        ];

        match lists.into_iter().find(|(_, items)| items.is_empty()) {
            Some((list, _)) => Err(CrmError::EmptyVocabulary { list }),
            None => Ok(()),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
