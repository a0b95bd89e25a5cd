//! 导出模块
//!
//! 将内存中的记录序列写入文件。输出格式由路径扩展名决定：
//! `.json`（不区分大小写）写 JSON 数组，其余一律写 CSV。

pub mod csv_format;
pub mod json_format;

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crm_shared::error::{CrmError, Result};
use tracing::{debug, info, instrument};

use crate::models::PhysicianRecord;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// 根据路径选择格式
    ///
    /// 只有以 `.json` 结尾（不区分大小写）的路径使用 JSON，包括没有扩展名的路径在内都使用 CSV
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().to_lowercase().ends_with(".json") {
            Self::Json
        } else {
            Self::Csv
        }
    }

    /// 获取格式名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 将记录写入文件，返回实际使用的格式
///
/// 目标文件会被创建或覆盖。写入中途失败时不清理已写出的部分内容
#[instrument(skip(records), fields(records = records.len()))]
pub fn export(records: &[PhysicianRecord], path: &Path) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path);
    debug!(%format, "选择输出格式");

    let file = File::create(path).map_err(|e| CrmError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => csv_format::write(records, &mut writer),
        OutputFormat::Json => json_format::write(records, &mut writer),
    }
    .map_err(|e| with_path(e, path))?;

    // 文件句柄在函数返回时关闭（包括错误路径）
    writer.flush().map_err(|e| CrmError::io(path, e))?;

    info!(path = %path.display(), %format, records = records.len(), "记录已写入文件");
    Ok(format)
}

/// 序列化器内部的 IO 错误统一转为带路径的 `CrmError::Io`
fn with_path(err: CrmError, path: &Path) -> CrmError {
    match err {
        CrmError::Csv(e) if e.is_io_error() => match e.into_kind() {
            csv::ErrorKind::Io(source) => CrmError::io(path, source),
            kind => CrmError::io(path, io::Error::other(format!("{kind:?}"))),
        },
        CrmError::Json(e) if e.is_io() => CrmError::io(path, e.into()),
        other => other,
    }
}

/// 从文件读回记录，格式选择规则与 [`export`] 相同
pub fn read(path: &Path) -> Result<Vec<PhysicianRecord>> {
    let file = File::open(path).map_err(|e| CrmError::io(path, e))?;
    let reader = BufReader::new(file);

    match OutputFormat::from_path(path) {
        OutputFormat::Csv => csv_format::read(reader),
        OutputFormat::Json => json_format::read(reader),
    }
}
