//! 配置管理模块
//!
//! 支持配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 环境变量前缀（TEST_CRM_GENERATOR__DEFAULT_QUANTITY -> generator.default_quantity）
pub const ENV_PREFIX: &str = "TEST_CRM";

/// 生成器配置
///
/// 控制生成数量的默认值与输出细节。测试标记（执业编号前缀、记录类型）
/// 是固定常量，不属于可配置项，配置中出现同名键会被忽略
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 命令行未指定或指定无效时使用的数量
    pub default_quantity: usize,
    /// 命令行未指定时的输出路径
    pub default_output: String,
    /// 邮箱域名
    pub email_domain: String,
    /// 电话国家码
    pub phone_country_code: u16,
    /// 外部词表文件（JSON/YAML）
    pub vocabulary_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_quantity: 20,
            default_output: "medicos_teste.csv".to_string(),
            email_domain: "example.test".to_string(),
            phone_country_code: 55,
            vocabulary_file: None,
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否启用 JSON 格式日志
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. {CONFIG_DIR}/default.toml（可选，CONFIG_DIR 默认为 config）
    /// 3. 命令行指定的配置文件（必须存在）
    /// 4. 环境变量（TEST_CRM_ 前缀）
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let mut builder = Config::builder()
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        // 用双下划线分隔层级，避免与字段名中的下划线冲突
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
