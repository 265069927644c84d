//! Error types.
//!
//! One enum per concern, folded into [`Error`] through `#[from]` so library
//! calls can use `?` across module boundaries.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Settings and env-file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Structured data loading and conversion errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read data file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid yaml in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid json in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index} is not an object")]
    NotARecord { index: usize },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Front-matter splitting errors.
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("malformed document: expected two '---' delimiters, found {delimiters}")]
    Malformed { delimiters: usize },

    #[error("invalid front matter yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front matter must be a mapping")]
    NotAMapping,
}

/// Secret resolution errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("{var} is not set")]
    MissingReference { var: String },

    #[error("{var} is not set")]
    MissingFallback { var: String },

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {}: {output}", describe_status(.status))]
    ToolFailed {
        tool: String,
        status: Option<i32>,
        output: String,
    },

    #[error("{tool} timed out after {timeout:?}")]
    Timeout { tool: String, timeout: Duration },

    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
