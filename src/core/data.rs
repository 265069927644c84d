//! Structured data loading.
//!
//! Loads content files from a data directory and decodes them by extension:
//! exactly `yaml` means YAML, everything else is JSON. Both decode into the
//! same generic [`Document`] tree.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::core::constants;
use crate::core::domain::Document;
use crate::error::{DataError, Result};

/// Source format of a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick a format from the text after the last `.` in `filename`.
    ///
    /// Only an exact `yaml` selects YAML; `yml`, `YAML` and extensionless
    /// names are all JSON.
    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, "yaml")) => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Decode `contents`; `origin` is only used to annotate errors.
    pub fn decode<T: DeserializeOwned>(&self, contents: &str, origin: &Path) -> Result<T> {
        match self {
            Self::Yaml => serde_yaml::from_str(&expand_tabs(contents)).map_err(|source| {
                DataError::Yaml {
                    path: origin.to_path_buf(),
                    source,
                }
                .into()
            }),
            Self::Json => serde_json::from_str(contents).map_err(|source| {
                DataError::Json {
                    path: origin.to_path_buf(),
                    source,
                }
                .into()
            }),
        }
    }
}

/// Replace every tab with four spaces.
///
/// YAML forbids tabs in indentation, and hand-edited content files are
/// full of them.
pub fn expand_tabs(contents: &str) -> String {
    contents.replace('\t', constants::YAML_TAB_REPLACEMENT)
}

/// Loads data files relative to a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLoader {
    base_dir: PathBuf,
}

impl DataLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full path of a data file
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Load and decode a data file into a generic document.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Read` if the file is missing or unreadable, and
    /// `DataError::Yaml` / `DataError::Json` if it does not decode.
    pub fn load(&self, filename: &str) -> Result<Document> {
        self.load_as(filename)
    }

    /// Load and decode a data file into a typed value.
    pub fn load_as<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.path_for(filename);
        let format = Format::from_filename(filename);
        debug!(path = %path.display(), format = ?format, "loading data file");

        let contents = std::fs::read_to_string(&path).map_err(|source| DataError::Read {
            path: path.clone(),
            source,
        })?;
        trace!(bytes = contents.len(), "read data file");

        format.decode(&contents, &path)
    }
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(constants::DATA_DIR)
    }
}

/// Load a data file from `base_dir`.
pub fn load(filename: &str, base_dir: impl Into<PathBuf>) -> Result<Document> {
    DataLoader::new(base_dir).load(filename)
}
