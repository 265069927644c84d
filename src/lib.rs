//! sitecfg - configuration and content loading for server-rendered sites.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── host          # Resolve a hostname to an environment
//! │   ├── vars          # Show merged .env layers
//! │   ├── secret        # Resolve a secret
//! │   ├── data          # Load a YAML/JSON data file
//! │   ├── matter        # Split a front-matter document
//! │   ├── csv           # Export records as CSV
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── host          # Hostname -> local / proof / live
//!     ├── layered       # ~/.env + project .env merging
//!     ├── secrets       # Secret tool or plaintext fallback
//!     ├── data          # Extension-dispatched YAML/JSON loading
//!     ├── frontmatter   # Metadata block + body splitting
//!     ├── convert       # Records -> CSV
//!     ├── settings      # sitecfg.toml
//!     └── domain/       # EnvVarSet, EnvironmentDescriptor, FrontMatterDocument
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sitecfg::core::{data, host, layered, secrets};
//!
//! # fn main() -> sitecfg::error::Result<()> {
//! let env = host::resolve("crema.test");
//! let vars = layered::load(Path::new("/srv/site/public"))?;
//! let password = secrets::resolve(&vars, "DB_PASSWORD")?;
//! let nav = data::load("nav.yaml", "data/")?;
//! # let _ = (env, password, nav);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{
    Document, EnvName, EnvVarSet, EnvironmentDescriptor, FrontMatterDocument,
};
pub use crate::error::{Error, Result};
