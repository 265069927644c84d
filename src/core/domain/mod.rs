//! Domain types.

mod env;
mod environment;
mod front_matter;

pub use env::EnvVarSet;
pub use environment::{EnvName, EnvironmentDescriptor};
pub use front_matter::FrontMatterDocument;

/// A decoded data file: generic mappings, sequences and scalars.
pub type Document = serde_json::Value;
