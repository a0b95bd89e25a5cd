//! 命令执行器
//!
//! 将命令行参数转化为一次完整的运行：
//! 解析数量与路径 → 生成记录 → 按扩展名选择格式写文件 → 输出结果摘要。

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crm_shared::config::AppConfig;
use tracing::{debug, info};

use super::commands::{Cli, InvalidQuantity, resolve_quantity};
use crate::export::{OutputFormat, export};
use crate::generators::{GenerationStats, PhysicianGenerator, Vocabulary};
use crate::models::PhysicianRecord;

/// 运行结果摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub count: usize,
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} registros salvos em ({}): {}",
            self.count,
            self.format,
            self.path.display()
        )
    }
}

/// 命令执行器
///
/// 持有加载后的配置，作为 CLI 与生成、导出逻辑之间的桥梁
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行一次生成
    ///
    /// 面向用户的提示和摘要写入 `out`；文件写入失败时返回错误，不做重试
    pub fn run<W: Write>(&self, cli: &Cli, out: &mut W) -> Result<RunSummary> {
        let defaults = &self.config.generator;

        let count = match resolve_quantity(cli.quantity.as_deref(), defaults.default_quantity) {
            Ok(count) => count,
            Err(InvalidQuantity(value)) => {
                debug!(value = %value, default = defaults.default_quantity, "数量参数无效，使用默认值");
                writeln!(
                    out,
                    "Primeiro argumento deve ser um número (quantidade). Usando padrão: {}",
                    defaults.default_quantity
                )?;
                defaults.default_quantity
            }
        };

        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&defaults.default_output));

        let records = self.generate(cli, count)?;

        let format = export(&records, &path)
            .with_context(|| format!("写入输出文件失败: {}", path.display()))?;

        let summary = RunSummary {
            count: records.len(),
            format,
            path,
        };
        writeln!(out, "{summary}")?;

        Ok(summary)
    }

    /// 按参数构造生成器并生成记录
    fn generate(&self, cli: &Cli, count: usize) -> Result<Vec<PhysicianRecord>> {
        let vocabulary = self.load_vocabulary(cli.vocabulary.as_deref())?;
        let config = self.config.generator.clone();

        let mut generator = match cli.seed {
            Some(seed) => PhysicianGenerator::seeded(config, vocabulary, seed),
            None => PhysicianGenerator::from_entropy(config, vocabulary),
        }
        .context("创建生成器失败")?;

        if let Some(date) = cli.date {
            generator = generator.with_date(date);
        }

        info!(
            count,
            seed = ?cli.seed,
            generated_on = %generator.generated_on(),
            "生成测试医生数据"
        );

        let records = generator.generate(count);

        let stats = GenerationStats::from_records(&records);
        debug!(
            total = stats.total,
            by_state = ?stats.by_state,
            by_specialty = ?stats.by_specialty,
            "数据生成完成"
        );

        Ok(records)
    }

    /// 加载词表
    ///
    /// 优先级：命令行参数 > 配置文件中的 vocabulary_file > 内置词表
    fn load_vocabulary(&self, explicit: Option<&Path>) -> Result<Vocabulary> {
        let source = explicit.or(self.config.generator.vocabulary_file.as_deref());

        match source {
            Some(path) => {
                let vocabulary = Vocabulary::load(path)
                    .with_context(|| format!("加载词表失败: {}", path.display()))?;
                info!(path = %path.display(), "从文件加载词表");
                Ok(vocabulary)
            }
            None => Ok(Vocabulary::default()),
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
