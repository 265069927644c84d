//! Host command.
//!
//! Shows which environment a hostname resolves to.

use crate::cli::output;
use crate::core::host::HostResolver;
use crate::core::settings::Settings;
use crate::error::Result;

/// Resolve `host` and print the descriptor.
pub fn execute(settings: &Settings, host: &str, json: bool) -> Result<()> {
    let descriptor = HostResolver::from_settings(&settings.host).resolve(host);

    if json {
        return output::json(&descriptor, true);
    }

    output::section("Environment");
    output::kv("host", host);
    output::kv("env", descriptor.env());
    for (key, value) in descriptor.options() {
        output::kv(key, value);
    }

    Ok(())
}
