//! Front-matter splitting.
//!
//! A document looks like:
//!
//! ```text
//! ---
//! title: Bakery rebrand
//! ---
//! Body text...
//! ```
//!
//! The YAML block handed to the decoder is everything from the start of the
//! text up to the second delimiter, so anything before the opening `---` is
//! decoded along with it. The body starts after the second delimiter line.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::trace;

use crate::core::constants::FRONT_MATTER_DELIMITER;
use crate::core::domain::FrontMatterDocument;
use crate::error::{FrontMatterError, Result};

/// Split a document into metadata and body.
///
/// # Errors
///
/// Returns `FrontMatterError::Malformed` if the delimiter occurs fewer than
/// twice, `FrontMatterError::Yaml` if the block does not decode and
/// `FrontMatterError::NotAMapping` if it decodes to a scalar or sequence.
pub fn split(content: &str) -> Result<FrontMatterDocument> {
    let (block, body) = locate(content)?;
    trace!(block_len = block.len(), body_len = body.len(), "split front matter");

    let metadata = match serde_yaml::from_str::<Value>(block).map_err(FrontMatterError::Yaml)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => return Err(FrontMatterError::NotAMapping.into()),
    };

    Ok(FrontMatterDocument::new(metadata, body.to_string()))
}

/// Find the metadata block and body without decoding anything.
///
/// The second delimiter is searched for from one byte past the start of the
/// first, so `----` counts as two overlapping delimiters.
fn locate(content: &str) -> Result<(&str, &str)> {
    let first = content
        .find(FRONT_MATTER_DELIMITER)
        .ok_or(FrontMatterError::Malformed { delimiters: 0 })?;

    let second = content[first + 1..]
        .find(FRONT_MATTER_DELIMITER)
        .map(|offset| first + 1 + offset)
        .ok_or(FrontMatterError::Malformed { delimiters: 1 })?;

    let rest = &content[second + FRONT_MATTER_DELIMITER.len()..];
    let body = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);

    Ok((&content[..second], body))
}

impl FrontMatterDocument {
    /// Read a file and split it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise the same
    /// errors as [`split`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        split(&content)
    }

    /// Split a string; same as [`split`].
    pub fn parse(content: &str) -> Result<Self> {
        split(content)
    }
}
