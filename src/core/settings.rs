//! Settings file management.
//!
//! Reads and validates `sitecfg.toml`. Every field has a default, so a
//! missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings stored in `sitecfg.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hostname markers for environment resolution
    pub host: HostSettings,
    /// External secret tool
    pub secrets: SecretSettings,
    /// Structured data location
    pub data: DataSettings,
}

/// `[host]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    pub local_marker: String,
    pub staging_marker: String,
}

/// `[secrets]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretSettings {
    /// Program name looked up on the search path
    pub tool: String,
    /// Upper bound on one tool invocation, in seconds
    pub timeout_secs: u64,
}

/// `[data]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub dir: PathBuf,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            local_marker: constants::LOCAL_HOST_MARKER.to_string(),
            staging_marker: constants::STAGING_HOST_MARKER.to_string(),
        }
    }
}

impl Default for SecretSettings {
    fn default() -> Self {
        Self {
            tool: constants::SECRET_TOOL.to_string(),
            timeout_secs: constants::SECRET_TIMEOUT_SECS,
        }
    }
}

impl SecretSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(constants::DATA_DIR),
        }
    }
}

impl Settings {
    /// Default settings path in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::SETTINGS_FILE)
    }

    /// Load settings from a file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` for malformed TOML, or `ConfigError::InvalidValue`
    /// if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading settings");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate field contents
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for empty markers, an empty tool
    /// name, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, bool, &str); 4] = [
            (
                "host.local_marker",
                self.host.local_marker.is_empty(),
                "must not be empty",
            ),
            (
                "host.staging_marker",
                self.host.staging_marker.is_empty(),
                "must not be empty",
            ),
            (
                "secrets.tool",
                self.secrets.tool.trim().is_empty(),
                "must not be empty",
            ),
            (
                "secrets.timeout_secs",
                self.secrets.timeout_secs == 0,
                "must be greater than 0",
            ),
        ];

        for (field, failed, reason) in checks {
            if failed {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: reason.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
