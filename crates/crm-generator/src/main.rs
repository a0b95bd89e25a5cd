//! 测试医生数据生成工具
//!
//! 命令行入口点：加载配置、初始化日志，然后执行一次生成。

use std::io;

use anyhow::Context;
use clap::Parser;
use crm_generator::cli::{Cli, CommandRunner};
use crm_shared::config::AppConfig;
use crm_shared::observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("加载配置失败")?;

    // 命令行指定的级别优先于配置文件，RUST_LOG 仍然优先于两者
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }
    observability::init(&config.observability)?;

    let runner = CommandRunner::new(config);
    runner.run(&cli, &mut io::stdout().lock())?;

    Ok(())
}
