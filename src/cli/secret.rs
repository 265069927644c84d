//! Secret command.
//!
//! Resolves one secret and prints it to stdout.

use std::path::Path;

use crate::cli::absolute_root;
use crate::core::layered::EnvLayers;
use crate::core::secrets::{ProcessEnv, SecretResolver};
use crate::core::settings::Settings;
use crate::error::Result;

/// Resolve `key` against the merged layers.
///
/// With `process_env` the layers are exported first and the lookup reads
/// the process environment, so variables set by the caller also count.
pub fn execute(
    settings: &Settings,
    key: &str,
    document_root: &Path,
    process_env: bool,
) -> Result<()> {
    let layers = EnvLayers::discover(&absolute_root(document_root)?)?;
    let resolver = SecretResolver::from_settings(&settings.secrets);

    let value = if process_env {
        layers.load_into_process()?;
        resolver.resolve(&ProcessEnv, key)?
    } else {
        let vars = layers.load()?;
        resolver.resolve(&vars, key)?
    };

    println!("{}", value.as_str());
    Ok(())
}
