//! Csv command.
//!
//! Converts a data file holding a list of records into a CSV file.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::convert;
use crate::core::data::DataLoader;
use crate::core::settings::Settings;
use crate::error::{Error, Result};

/// Load `input` and write its records to `output_path`.
///
/// A top-level object is treated as a keyed collection of records.
pub fn execute(
    settings: &Settings,
    input: &str,
    output_path: &Path,
    base_dir: Option<PathBuf>,
) -> Result<()> {
    let loader = DataLoader::new(base_dir.unwrap_or_else(|| settings.data.dir.clone()));

    let rows = match loader.load(input)? {
        Value::Array(rows) => rows,
        Value::Object(map) => map.into_iter().map(|(_, row)| row).collect(),
        _ => {
            return Err(Error::Other(format!(
                "{} does not contain a list of records",
                input
            )))
        }
    };

    let count = convert::export_csv(&rows, output_path)?;
    output::success(&format!(
        "wrote {} rows to {}",
        count,
        output::path(&output_path.display().to_string())
    ));
    Ok(())
}
