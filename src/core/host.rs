//! Host-based environment resolution.
//!
//! Maps a request hostname to the deployment environment it belongs to.
//! Rules are checked in order and the first match wins:
//!
//! 1. host contains the local marker (`.test`) -> `local`, with `debug = true`
//! 2. host contains the staging marker -> `proof`
//! 3. anything else -> `live`

use tracing::debug;

use crate::core::constants;
use crate::core::domain::{EnvName, EnvironmentDescriptor};
use crate::core::settings::HostSettings;

/// Resolves hostnames using a pair of substring markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResolver {
    local_marker: String,
    staging_marker: String,
}

impl HostResolver {
    pub fn new(local_marker: impl Into<String>, staging_marker: impl Into<String>) -> Self {
        Self {
            local_marker: local_marker.into(),
            staging_marker: staging_marker.into(),
        }
    }

    pub fn from_settings(settings: &HostSettings) -> Self {
        Self::new(&settings.local_marker, &settings.staging_marker)
    }

    /// Resolve a hostname to a fresh descriptor.
    ///
    /// Never fails: an empty or unrecognised host resolves to `live`.
    pub fn resolve(&self, host: &str) -> EnvironmentDescriptor {
        if host.is_empty() {
            debug!("empty host, defaulting to live");
            return EnvironmentDescriptor::default();
        }

        let descriptor = if host.contains(&self.local_marker) {
            EnvironmentDescriptor::new(EnvName::Local).with_option("debug", true)
        } else if host.contains(&self.staging_marker) {
            EnvironmentDescriptor::new(EnvName::Proof)
        } else {
            EnvironmentDescriptor::default()
        };

        debug!(host = %host, env = %descriptor.env(), "resolved host");
        descriptor
    }
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::new(constants::LOCAL_HOST_MARKER, constants::STAGING_HOST_MARKER)
    }
}

/// Resolve a hostname with the default markers.
pub fn resolve(host: &str) -> EnvironmentDescriptor {
    HostResolver::default().resolve(host)
}
