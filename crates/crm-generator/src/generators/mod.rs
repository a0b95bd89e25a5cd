//! 生成器模块
//!
//! 提供测试医生数据的批量生成功能。

pub mod physician_generator;
pub mod vocabulary;

pub use physician_generator::{GenerationStats, PhysicianGenerator, email_local_part};
pub use vocabulary::Vocabulary;
