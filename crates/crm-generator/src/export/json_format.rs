//! JSON 格式
//!
//! 两空格缩进的对象数组，非 ASCII 字符原样输出。

use std::io::{Read, Write};

use crm_shared::error::Result;

use crate::models::PhysicianRecord;

/// 写入 JSON 数组，空序列输出 `[]`
pub fn write<W: Write>(records: &[PhysicianRecord], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// 解析 JSON 数组
pub fn read<R: Read>(reader: R) -> Result<Vec<PhysicianRecord>> {
    Ok(serde_json::from_reader(reader)?)
}
