//! Matter command.
//!
//! Splits a front-matter document and shows both halves.

use std::path::Path;

use crate::cli::output;
use crate::core::domain::FrontMatterDocument;
use crate::error::Result;

/// Split the document at `path` and print metadata and body.
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let doc = FrontMatterDocument::from_file(path)?;

    if json {
        return output::json(&doc, true);
    }

    output::section("Metadata");
    if doc.metadata().is_empty() {
        output::dimmed("none");
    } else {
        for (key, value) in doc.metadata() {
            output::kv(key, value);
        }
    }

    output::section("Content");
    print!("{}", doc.content());
    if !doc.content().ends_with('\n') {
        println!();
    }

    Ok(())
}
