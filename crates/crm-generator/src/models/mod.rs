//! 模拟数据模型
//!
//! 包含医生记录的数据结构，用于测试和开发环境。

pub mod physician;

pub use physician::{PhysicianRecord, TEST_MARKER_PREFIX, TEST_ONLY_TAG};
