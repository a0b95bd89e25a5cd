//! CRM Generator
//!
//! 生成带测试标记的虚构医生数据，用于开发和测试环境。
//!
//! # 主要模块
//!
//! - `models`: 医生记录数据结构
//! - `generators`: 词表与记录生成器
//! - `export`: CSV/JSON 导出
//! - `cli`: 命令行接口
//!
//! # 使用示例
//!
//! ```rust
//! use crm_generator::generators::{PhysicianGenerator, Vocabulary};
//! use crm_generator::models::TEST_MARKER_PREFIX;
//! use crm_shared::config::GeneratorConfig;
//!
//! // 固定种子，输出可复现
//! let mut generator =
//!     PhysicianGenerator::seeded(GeneratorConfig::default(), Vocabulary::default(), 42).unwrap();
//! let records = generator.generate(5);
//!
//! assert_eq!(records.len(), 5);
//! assert!(records.iter().all(|r| r.license_id.starts_with(TEST_MARKER_PREFIX)));
//! ```

pub mod cli;
pub mod export;
pub mod generators;
pub mod models;
