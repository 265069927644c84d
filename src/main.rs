//! sitecfg - environment, secrets and content data for server-rendered sites.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sitecfg::cli::output;
use sitecfg::cli::{execute, Cli};
use sitecfg::error::{ConfigError, Error, FrontMatterError, SecretError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SITECFG_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sitecfg=debug")
        } else {
            EnvFilter::new("sitecfg=warn")
        }
    });

    // SITECFG_LOG_FORMAT=json switches to one JSON object per event
    let json_logs = std::env::var("SITECFG_LOG_FORMAT").is_ok_and(|v| v == "json");
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, cli.settings.as_deref()) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<String> {
    match e {
        Error::Config(ConfigError::NoHomeDir) => Some("set HOME".to_string()),
        Error::Config(ConfigError::Parse { .. } | ConfigError::InvalidValue { .. }) => {
            Some("check sitecfg.toml".to_string())
        }
        Error::Secret(SecretError::MissingFallback { var }) => {
            Some(format!("add {} to ~/.env or the project .env", var))
        }
        Error::Secret(SecretError::MissingReference { var }) => {
            Some(format!("set {} to a secret reference such as op://vault/item/field", var))
        }
        Error::Secret(SecretError::Timeout { .. }) => {
            Some("raise [secrets] timeout_secs in sitecfg.toml".to_string())
        }
        Error::FrontMatter(FrontMatterError::Malformed { .. }) => {
            Some("documents need an opening and a closing --- line".to_string())
        }
        _ => None,
    }
}
