//! Environment descriptor.
//!
//! Which deployment a request is being served from, plus the rendering
//! options that go with it.

use serde::Serialize;
use serde_json::{Map, Value};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvName {
    Local,
    Proof,
    Live,
}

impl EnvName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Proof => "proof",
            Self::Live => "live",
        }
    }
}

impl std::fmt::Display for EnvName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved environment for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentDescriptor {
    env: EnvName,
    options: Map<String, Value>,
}

impl EnvironmentDescriptor {
    /// Descriptor with no template options
    pub fn new(env: EnvName) -> Self {
        Self {
            env,
            options: Map::new(),
        }
    }

    /// Add a template option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn env(&self) -> EnvName {
        self.env
    }

    /// Options handed to the templating layer
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Whether templates should render in debug mode
    pub fn is_debug(&self) -> bool {
        self.option("debug").and_then(Value::as_bool).unwrap_or(false)
    }
}

impl Default for EnvironmentDescriptor {
    fn default() -> Self {
        Self::new(EnvName::Live)
    }
}
