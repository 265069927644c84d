//! Vars command.
//!
//! Shows the variables merged from the user and project `.env` layers.

use serde_json::{Map, Value};
use std::path::Path;

use crate::cli::{absolute_root, output};
use crate::core::layered::EnvLayers;
use crate::error::Result;

/// Load both layers and print the merged keys (and values if asked).
pub fn execute(document_root: &Path, json: bool, values: bool) -> Result<()> {
    let layers = EnvLayers::discover(&absolute_root(document_root)?)?;
    let merged = layers.load()?;

    if json {
        let rendered = if values {
            Value::Object(
                merged
                    .entries()
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect::<Map<_, _>>(),
            )
        } else {
            Value::Array(merged.keys().map(|k| Value::String(k.to_string())).collect())
        };
        return output::json(&rendered, true);
    }

    output::section("Env layers");
    for (label, path) in [("user", layers.global()), ("project", layers.local())] {
        let state = if path.is_file() { "" } else { " (missing)" };
        output::kv(
            label,
            format!("{}{}", output::path(&path.display().to_string()), state),
        );
    }

    output::section("Variables");
    if merged.is_empty() {
        output::dimmed("no variables set");
    } else if values {
        print!("{}", merged);
    } else {
        for key in merged.keys() {
            output::list_item(key);
        }
    }

    Ok(())
}
