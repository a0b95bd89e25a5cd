//! CLI 模块
//!
//! 命令行接口：`test-crm [数量] [输出路径] [选项]`
//!
//! # 使用示例
//!
//! ```bash
//! # 默认 20 条，写入 medicos_teste.csv
//! test-crm
//!
//! # 50 条，写入 CSV
//! test-crm 50 medicos_teste.csv
//!
//! # 固定种子与日期，写入 JSON
//! test-crm 10 medicos.json --seed 42 --date 2024-01-01
//!
//! # 使用自定义词表
//! test-crm 10 medicos.csv --vocabulary vocab.yaml
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, InvalidQuantity, resolve_quantity};
pub use runner::{CommandRunner, RunSummary};
