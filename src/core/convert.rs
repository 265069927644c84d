//! CSV export of record lists.
//!
//! Turns a sequence of JSON objects (typically a loaded data file) into CSV.
//! The first record's keys, in the order the source file lists them, form
//! the header.
//! Later records are written in header order with gaps left empty, and any
//! keys the header lacks are appended after it.

use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::core::domain::Document;
use crate::error::{DataError, Result};

/// Write records as CSV to any writer.
///
/// Returns the number of data rows written (excluding the header).
///
/// # Errors
///
/// Returns `DataError::NotARecord` if an element is not an object, or
/// `DataError::Csv` if writing fails.
pub fn write_records<W: Write>(rows: &[Document], writer: W) -> Result<usize> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let header: Vec<&str> = match rows.first() {
        Some(Value::Object(first)) => first.keys().map(String::as_str).collect(),
        Some(_) => return Err(DataError::NotARecord { index: 0 }.into()),
        None => return Ok(0),
    };
    csv.write_record(&header).map_err(DataError::from)?;

    for (index, row) in rows.iter().enumerate() {
        let record = row.as_object().ok_or(DataError::NotARecord { index })?;

        let mut cells: Vec<String> = header
            .iter()
            .map(|key| record.get(*key).map(cell).unwrap_or_default())
            .collect();
        cells.extend(
            record
                .iter()
                .filter(|(key, _)| !header.contains(&key.as_str()))
                .map(|(_, value)| cell(value)),
        );

        csv.write_record(&cells).map_err(DataError::from)?;
    }

    csv.flush()?;
    Ok(rows.len())
}

/// Write records as CSV to a file, replacing it if present.
pub fn export_csv(rows: &[Document], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let count = write_records(rows, file)?;
    debug!(path = %path.display(), rows = count, "wrote csv");
    Ok(count)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}
