//! Table form: semicolon-delimited rows under a fixed 8-column header.
//!
//! ```text
//! id;masa;pos_x;pos_y;pos_z;vel_x;vel_y;vel_z
//! sun;1989000000000000000000000000000;0;0;0;0;0;0
//! ```
//!
//! Reading is forgiving: rows with the wrong number of fields, with bytes
//! that are not UTF-8 or with a number that does not parse are skipped with
//! a warning.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::warn;

use crate::error::SimError;
use crate::persistence::records::BodyRecord;

pub const HEADER: [&str; 8] = ["id", "masa", "pos_x", "pos_y", "pos_z", "vel_x", "vel_y", "vel_z"];
const DELIMITER: u8 = b';';

pub fn write_records(path: &Path, records: &[BodyRecord]) -> Result<(), SimError> {
    let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_path(path)?;
    writer.write_record(HEADER)?;

    for r in records {
        let mut row = Vec::with_capacity(HEADER.len());
        row.push(r.id.clone());
        row.push(r.mass.to_string());
        row.extend(r.position.iter().map(f64::to_string));
        row.extend(r.velocity.iter().map(f64::to_string));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Parsed records plus the number of rows that were skipped
pub fn read_records(path: &Path) -> Result<(Vec<BodyRecord>, usize), SimError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.byte_records() {
        let row = row?;
        let line = row.position().map(|p| p.line());
        let row = match StringRecord::from_byte_record(row) {
            Ok(row) => row,
            Err(e) => {
                warn!(?line, error = %e.utf8_error(), "table row is not valid UTF-8, skipping");
                skipped += 1;
                continue;
            }
        };
        if row.len() != HEADER.len() {
            warn!(row = ?row, fields = row.len(), "malformed table row, skipping");
            skipped += 1;
            continue;
        }
        match parse_row(&row) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(row = ?row, error = %e, "unparsable table row, skipping");
                skipped += 1;
            }
        }
    }

    Ok((records, skipped))
}

fn parse_row(row: &StringRecord) -> Result<BodyRecord, SimError> {
    let number = |i: usize| -> Result<f64, SimError> {
        let field = &row[i];
        field.trim().parse::<f64>().map_err(|e| {
            SimError::validation(format!("column '{}' has non-numeric value '{field}': {e}", HEADER[i]))
        })
    };

    Ok(BodyRecord {
        id: row[0].to_string(),
        mass: number(1)?,
        position: vec![number(2)?, number(3)?, number(4)?],
        velocity: vec![number(5)?, number(6)?, number(7)?],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_header_is_written_first() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("state.csv");
        let records = vec![BodyRecord {
            id: "a".into(),
            mass: 2.5,
            position: vec![1.0, -2.0, 3.5],
            velocity: vec![0.0, 0.25, 0.0],
        }];

        write_records(&path, &records).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("id;masa;pos_x;pos_y;pos_z;vel_x;vel_y;vel_z"));
        assert_eq!(lines.next(), Some("a;2.5;1;-2;3.5;0;0.25;0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn table_skips_short_and_non_numeric_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("mixed.csv");
        std::fs::write(
            &path,
            "id;masa;pos_x;pos_y;pos_z;vel_x;vel_y;vel_z\n\
             good;1;0;0;0;0;0;0\n\
             short;1;0;0;0\n\
             words;heavy;0;0;0;0;0;0\n\
             also_good; 2.0 ;1;1;1;0;0;0\n",
        )
        .unwrap();

        let (records, skipped) = read_records(&path).unwrap();
        assert_eq!(skipped, 2);
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["good", "also_good"]);
        assert_eq!(records[1].mass, 2.0);
    }

    #[test]
    fn table_skips_row_with_invalid_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bytes.csv");
        let mut data = b"id;masa;pos_x;pos_y;pos_z;vel_x;vel_y;vel_z\na;1;0;0;0;0;0;0\nb;".to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        data.extend_from_slice(b";0;0;0;0;0;0\nc;2;1;1;1;0;0;0\n");
        std::fs::write(&path, data).unwrap();

        let (records, skipped) = read_records(&path).unwrap();
        assert_eq!(skipped, 1);
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
