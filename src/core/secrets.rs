//! Secret resolution.
//!
//! A secret key such as `DB_PASSWORD` resolves in one of two ways:
//!
//! - the secret tool (`op` by default) is on the search path: the reference
//!   in `DB_PASSWORD_REF` is passed to `op read <ref>` and its output is the
//!   value
//! - the tool is missing: the plaintext in `DB_PASSWORD_KEY` is returned
//!
//! Nothing is cached. Tool detection and the lookup itself run on every call
//! so rotated secrets are picked up immediately.
//!
//! Variables are read from a [`VarSource`]: usually the [`EnvVarSet`]
//! produced by the layered loader, or [`ProcessEnv`] for code that still
//! exports everything into the process environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::domain::EnvVarSet;
use crate::core::settings::SecretSettings;
use crate::core::validation::validate_key;
use crate::error::{Result, SecretError};

/// Somewhere to read `<KEY>_REF` / `<KEY>_KEY` variables from.
pub trait VarSource {
    /// Value of a variable, if set
    fn var(&self, name: &str) -> Option<String>;
}

impl VarSource for EnvVarSet {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Resolves secret keys through the secret tool or a plaintext fallback
#[derive(Debug, Clone)]
pub struct SecretResolver {
    tool: String,
    search_path: Option<OsString>,
    timeout: Duration,
}

impl SecretResolver {
    /// Resolver for `tool`, searched on `PATH`, with the default timeout
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            search_path: None,
            timeout: Duration::from_secs(constants::SECRET_TIMEOUT_SECS),
        }
    }

    pub fn from_settings(settings: &SecretSettings) -> Self {
        Self::new(&settings.tool).with_timeout(settings.timeout())
    }

    /// Search these directories instead of `PATH` (same separator rules).
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// Bound each tool invocation
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full path of the secret tool, if it can be found
    pub fn locate_tool(&self) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(&self.tool, Some(paths), cwd)
            }
            None => which::which(&self.tool),
        };
        found.ok()
    }

    /// Resolve a secret key.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if `key` is not a valid variable name
    /// - `SecretError::MissingReference` / `MissingFallback` if the variable
    ///   for the active path is not set
    /// - `SecretError::ToolFailed` if the tool exits unsuccessfully
    /// - `SecretError::Timeout` if the tool does not finish in time
    /// - `SecretError::Spawn` if the tool cannot be started
    pub fn resolve(&self, source: &impl VarSource, key: &str) -> Result<Zeroizing<String>> {
        validate_key(key)?;

        match self.locate_tool() {
            Some(program) => {
                let var = format!("{}{}", key, constants::REF_SUFFIX);
                let reference = source
                    .var(&var)
                    .ok_or(SecretError::MissingReference { var })?;

                debug!(key = %key, tool = %program.display(), "resolving secret via tool");
                self.read_reference(&program, &reference)
            }
            None => {
                let var = format!("{}{}", key, constants::KEY_SUFFIX);
                debug!(key = %key, tool = %self.tool, "secret tool not found, using fallback");

                source
                    .var(&var)
                    .map(Zeroizing::new)
                    .ok_or_else(|| SecretError::MissingFallback { var }.into())
            }
        }
    }

    fn read_reference(&self, program: &Path, reference: &str) -> Result<Zeroizing<String>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SecretError::Runtime)?;

        let mut cmd = tokio::process::Command::new(program);
        cmd.args([constants::SECRET_TOOL_READ, reference])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let result = rt.block_on(async { tokio::time::timeout(self.timeout, cmd.output()).await });

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(SecretError::Spawn {
                    tool: self.tool.clone(),
                    source,
                }
                .into())
            }
            Err(_) => {
                warn!(tool = %self.tool, timeout = ?self.timeout, "secret tool timed out");
                return Err(SecretError::Timeout {
                    tool: self.tool.clone(),
                    timeout: self.timeout,
                }
                .into());
            }
        };

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));

            warn!(tool = %self.tool, status = ?output.status.code(), "secret tool failed");
            return Err(SecretError::ToolFailed {
                tool: self.tool.clone(),
                status: output.status.code(),
                output: combined.trim().to_string(),
            }
            .into());
        }

        let stdout = Zeroizing::new(String::from_utf8_lossy(&output.stdout).into_owned());
        trace!(len = stdout.trim().len(), "secret tool returned value");
        Ok(Zeroizing::new(stdout.trim().to_string()))
    }
}

impl Default for SecretResolver {
    fn default() -> Self {
        Self::new(constants::SECRET_TOOL)
    }
}

/// Resolve a secret from an explicit variable set with default settings.
pub fn resolve(vars: &EnvVarSet, key: &str) -> Result<Zeroizing<String>> {
    SecretResolver::default().resolve(vars, key)
}
