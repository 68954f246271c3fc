//! Save and restore the body collection
//!
//! Two formats, chosen by the caller through [`Format`]:
//! - `Json`: array of `{id, masa, posicion, velocidad}` records
//! - `Csv`: `;`-delimited table with the [`table::HEADER`] columns
//!
//! Loading is all-or-nothing at the file level (an unreadable file changes
//! nothing) and per-record below that (a bad record is skipped and counted).

pub mod json;
pub mod records;
pub mod table;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::SimError;
use crate::simulation::states::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// A name ending in `.json` (any case) is JSON, anything else is the table form
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let name = path.as_ref().to_string_lossy().to_ascii_lowercase();
        if name.ends_with(".json") {
            Format::Json
        } else {
            Format::Csv
        }
    }
}

impl FromStr for Format {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            _ => Err(SimError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Csv => write!(f, "CSV"),
        }
    }
}

/// Outcome of a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize, // bodies now in the engine
    pub skipped: usize, // rows/records rejected while reading
}

/// Write `bodies` in order. An empty slice writes nothing and returns 0.
pub fn save(bodies: &[Body], path: &Path, format: Format) -> Result<usize, SimError> {
    if bodies.is_empty() {
        warn!(path = %path.display(), "no bodies to save, file not written");
        return Ok(0);
    }

    let records: Vec<_> = bodies.iter().map(Body::to_record).collect();
    match format {
        Format::Json => json::write_records(path, &records)?,
        Format::Csv => table::write_records(path, &records)?,
    }

    info!(path = %path.display(), %format, count = records.len(), "simulation saved");
    Ok(records.len())
}

/// Read and validate every record in `path`
/// Returns the bodies in file order (duplicates included) and the skip count.
pub fn load(path: &Path, format: Format) -> Result<(Vec<Body>, usize), SimError> {
    let (records, mut skipped) = match format {
        Format::Json => (json::read_records(path)?, 0),
        Format::Csv => table::read_records(path)?,
    };

    let mut bodies = Vec::with_capacity(records.len());
    for record in records {
        let id = record.id.clone();
        match Body::from_record(record) {
            Ok(body) => bodies.push(body),
            Err(e) => {
                warn!(id = %id, error = %e, "invalid body in file, skipping");
                skipped += 1;
            }
        }
    }

    Ok((bodies, skipped))
}
