//! CSV 格式
//!
//! 表头来自固定字段列表，因此空记录序列也会输出表头行。
//! 行结束符使用 CRLF（RFC 4180）。

use std::io::{Read, Write};

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use crm_shared::error::Result;

use crate::models::PhysicianRecord;

/// 写入表头及每条记录一行
pub fn write<W: Write>(records: &[PhysicianRecord], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(PhysicianRecord::FIELDS)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// 按表头解析记录
pub fn read<R: Read>(reader: R) -> Result<Vec<PhysicianRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<PhysicianRecord>, _>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, specialty: &str) -> PhysicianRecord {
        PhysicianRecord {
            name: name.to_string(),
            license_id: "TEST-CRM-RJ-000123".to_string(),
            state: "RJ".to_string(),
            specialty: specialty.to_string(),
            email: "x.1@example.test".to_string(),
            phone: "+55 (21) 98000-1000".to_string(),
            record_type: "TEST_ONLY".to_string(),
            generated_on: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        }
    }

    #[test]
    fn test_empty_writes_header_only() {
        let mut buf = Vec::new();
        write(&[], &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "nome,crm,estado,especialidade,email,telefone,registro_tipo,gerado_em\r\n"
        );
    }

    #[test]
    fn test_row_layout() {
        let mut buf = Vec::new();
        write(&[record("Ana Silva", "Clínica Geral")], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            "Ana Silva,TEST-CRM-RJ-000123,RJ,Clínica Geral,x.1@example.test,+55 (21) 98000-1000,TEST_ONLY,2024-01-02"
        );
    }

    #[test]
    fn test_fields_needing_quotes_survive() {
        let original = vec![record("Ana \"Dra\" Silva", "Cardio, Pediatria")];
        let mut buf = Vec::new();
        write(&original, &mut buf).unwrap();

        let parsed = read(buf.as_slice()).unwrap();
        assert_eq!(parsed, original);
    }
}
