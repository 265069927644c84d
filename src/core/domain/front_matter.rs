//! Front-matter document type.

use serde::Serialize;
use serde_json::{Map, Value};

/// A text document split into its metadata block and body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontMatterDocument {
    metadata: Map<String, Value>,
    content: String,
}

impl FrontMatterDocument {
    pub fn new(metadata: Map<String, Value>, content: String) -> Self {
        Self { metadata, content }
    }

    /// Decoded metadata mapping
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Body text after the closing delimiter
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}
