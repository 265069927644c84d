//! Constants used throughout sitecfg.
//!
//! Centralizes magic strings and default values.

/// Environment variables file name, used for both the user and project layer.
pub const ENV_FILE: &str = ".env";

/// Settings file name, looked up in the current directory by default.
pub const SETTINGS_FILE: &str = "sitecfg.toml";

/// Hostname substring that selects the `local` environment.
pub const LOCAL_HOST_MARKER: &str = ".test";

/// Hostname substring that selects the `proof` (staging) environment.
pub const STAGING_HOST_MARKER: &str = "cremadesignstudio";

/// Default directory that data files are loaded from.
pub const DATA_DIR: &str = "data/";

/// External secret-management CLI.
pub const SECRET_TOOL: &str = "op";

/// Subcommand passed to the secret tool ahead of the reference.
pub const SECRET_TOOL_READ: &str = "read";

/// Upper bound on a single secret tool invocation.
pub const SECRET_TIMEOUT_SECS: u64 = 30;

/// Suffix of the variable holding a secret reference (`DB_PASSWORD_REF`).
pub const REF_SUFFIX: &str = "_REF";

/// Suffix of the variable holding a plaintext fallback (`DB_PASSWORD_KEY`).
pub const KEY_SUFFIX: &str = "_KEY";

/// Front-matter delimiter.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Replacement for each tab in YAML sources.
pub const YAML_TAB_REPLACEMENT: &str = "    ";
