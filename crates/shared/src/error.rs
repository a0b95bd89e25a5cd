//! 统一错误处理模块
//!
//! 定义生成器与导出器共享的错误类型，使用 thiserror 提供良好的错误信息。

use std::path::PathBuf;

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum CrmError {
    // ==================== 文件错误 ====================
    #[error("文件读写失败: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ==================== 序列化错误 ====================
    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML 错误: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ==================== 词表错误 ====================
    #[error("词表为空: {list}")]
    EmptyVocabulary { list: &'static str },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, CrmError>;

impl CrmError {
    /// 构造带路径信息的 IO 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::EmptyVocabulary { .. } => "EMPTY_VOCABULARY",
        }
    }
}
