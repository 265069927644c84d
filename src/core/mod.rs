//! Core library components.
//!
//! Environment resolution, layered `.env` loading, secret lookup and content
//! data loading, independent of the CLI.

pub mod constants;
pub mod convert;
pub mod data;
pub mod domain;
pub mod frontmatter;
pub mod host;
pub mod layered;
pub mod secrets;
pub mod settings;
pub mod validation;
