//! Data command.
//!
//! Loads a data file and prints it as JSON.

use std::path::PathBuf;

use crate::cli::output;
use crate::core::data::DataLoader;
use crate::core::settings::Settings;
use crate::error::Result;

/// Load `file` from the data directory and print it.
pub fn execute(
    settings: &Settings,
    file: &str,
    base_dir: Option<PathBuf>,
    compact: bool,
) -> Result<()> {
    let loader = DataLoader::new(base_dir.unwrap_or_else(|| settings.data.dir.clone()));
    let doc = loader.load(file)?;
    output::json(&doc, !compact)
}
