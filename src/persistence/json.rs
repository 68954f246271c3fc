//! Structured form: a JSON array of body records.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::SimError;
use crate::persistence::records::BodyRecord;

pub fn write_records(path: &Path, records: &[BodyRecord]) -> Result<(), SimError> {
    let mut writer = BufWriter::new(File::create(path)?);
    {
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut ser)?;
    }
    writer.flush()?;
    Ok(())
}

/// The whole document must decode; per-record checks happen later
pub fn read_records(path: &Path) -> Result<Vec<BodyRecord>, SimError> {
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<BodyRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_original_field_names() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("state.json");
        let records = vec![BodyRecord {
            id: "earth".into(),
            mass: 5.972e24,
            position: vec![1.496e11, 0.0, 0.0],
            velocity: vec![0.0, 29780.0, 0.0],
        }];

        write_records(&path, &records).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let first = &value[0];
        assert_eq!(first["id"], "earth");
        assert_eq!(first["masa"], 5.972e24);
        assert_eq!(first["posicion"].as_array().unwrap().len(), 3);
        assert_eq!(first["velocidad"][1], 29780.0);
    }

    #[test]
    fn json_short_list_still_decodes_as_record() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("short.json");
        std::fs::write(
            &path,
            r#"[{"id": "a", "masa": 1.0, "posicion": [1.0, 2.0], "velocidad": [0.0, 0.0, 0.0]}]"#,
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position, vec![1.0, 2.0]);
    }

    #[test]
    fn json_garbage_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_records(&path), Err(SimError::Json(_))));
    }
}
