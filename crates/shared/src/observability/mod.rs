//! 可观测性模块
//!
//! 提供日志的统一初始化。生成器是一次性命令行工具，
//! 只需要结构化日志，不导出指标和分布式追踪。

pub mod tracing;

pub use self::tracing::init;
pub use crate::config::ObservabilityConfig;
