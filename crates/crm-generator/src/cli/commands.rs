//! CLI 参数定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 两个位置参数保持 `test-crm [数量] [输出路径]` 的调用方式，其余为可选项。

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// 测试医生数据生成工具
///
/// 生成带 TEST-CRM 标记的虚构医生记录，按输出路径扩展名写入 CSV 或 JSON。
#[derive(Parser, Debug, Clone)]
#[command(name = "test-crm")]
#[command(version, about = "生成测试用虚构医生数据（CSV/JSON）")]
pub struct Cli {
    /// 生成数量（非数字时使用默认值并给出提示）
    ///
    /// 以 `-` 开头的未知写法（如 `-5`、`-abc`）也作为数量值接收，
    /// 交给 `resolve_quantity` 判定；已定义的选项仍按选项解析
    #[arg(allow_hyphen_values = true)]
    pub quantity: Option<String>,

    /// 输出文件路径（以 .json 结尾时输出 JSON，否则输出 CSV）
    pub output: Option<PathBuf>,

    /// 随机种子，指定后输出可复现
    #[arg(long)]
    pub seed: Option<u64>,

    /// 覆盖生成日期（YYYY-MM-DD）
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// 词表文件（JSON/YAML）
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

/// 数量参数无法解析为非负整数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidQuantity(pub String);

/// 解析数量参数
///
/// 未提供时返回默认值；提供但无法解析（含负数）时返回 `InvalidQuantity`，
/// 由调用方决定提示方式
pub fn resolve_quantity(raw: Option<&str>, default: usize) -> Result<usize, InvalidQuantity> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| InvalidQuantity(value.to_string())),
    }
}

// ============================================================================
// 单元测试
// ============================================================================
