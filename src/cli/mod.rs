//! Command-line interface.

pub mod completions;
pub mod csv;
pub mod data;
pub mod host;
pub mod matter;
pub mod output;
pub mod secret;
pub mod vars;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::settings::Settings;
use crate::error::Result;

/// sitecfg - environment, secrets and content data for server-rendered sites.
#[derive(Parser)]
#[command(
    name = "sitecfg",
    about = "Environment, secrets and content data for server-rendered sites",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ./sitecfg.toml when present)
    #[arg(long, global = true, env = "SITECFG_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a hostname to its deployment environment
    Host {
        /// Request hostname (e.g., crema.test)
        host: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show variables merged from ~/.env and the project .env
    Vars {
        /// Served document root; the project .env lives one level above it
        #[arg(long, env = "DOCUMENT_ROOT", default_value = ".")]
        document_root: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print values as well as keys
        #[arg(long)]
        values: bool,
    },

    /// Resolve a secret through the secret tool or its _KEY fallback
    Secret {
        /// Secret key (e.g., DB_PASSWORD)
        key: String,
        /// Served document root; the project .env lives one level above it
        #[arg(long, env = "DOCUMENT_ROOT", default_value = ".")]
        document_root: PathBuf,
        /// Export the merged layers and read from the process environment
        #[arg(long)]
        process_env: bool,
    },

    /// Load a YAML or JSON data file and print it as JSON
    Data {
        /// File name relative to the data directory
        file: String,
        /// Data directory (defaults to the settings value, data/)
        #[arg(long)]
        base_dir: Option<PathBuf>,
        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Split a front-matter document into metadata and body
    Matter {
        /// Path to the document
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a data file holding a list of records to CSV
    Csv {
        /// Input file name relative to the data directory
        input: String,
        /// Output CSV path
        output: PathBuf,
        /// Data directory (defaults to the settings value, data/)
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, settings_path: Option<&Path>) -> Result<()> {
    use Command::*;

    let settings = match settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(Settings::default_path())?,
    };

    match command {
        Host { host, json } => host::execute(&settings, &host, json),
        Vars {
            document_root,
            json,
            values,
        } => vars::execute(&document_root, json, values),
        Secret {
            key,
            document_root,
            process_env,
        } => secret::execute(&settings, &key, &document_root, process_env),
        Data {
            file,
            base_dir,
            compact,
        } => data::execute(&settings, &file, base_dir, compact),
        Matter { path, json } => matter::execute(&path, json),
        Csv {
            input,
            output,
            base_dir,
        } => csv::execute(&settings, &input, &output, base_dir),
        Completions { shell } => completions::execute(shell),
    }
}

/// Make a document root absolute so its parent is meaningful.
pub(crate) fn absolute_root(document_root: &Path) -> Result<PathBuf> {
    if document_root.exists() {
        return Ok(std::fs::canonicalize(document_root)?);
    }
    Ok(std::env::current_dir()?.join(document_root))
}
