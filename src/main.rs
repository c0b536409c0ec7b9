//! Strongroom - security layer for a local credential vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use strongroom::cli::output;
use strongroom::cli::{execute, Cli};
use strongroom::error::{Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("STRONGROOM_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("strongroom=debug")
        } else {
            EnvFilter::new("strongroom=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Store(StoreError::NoHome) => Some("set STRONGROOM_HOME to the vault directory"),
            Error::Store(StoreError::UnsupportedVersion { .. }) => {
                Some("upgrade strongroom to open this vault")
            }
            Error::Config(_) => Some("check config.toml in the vault home"),
            Error::Cipher(_) => Some("the vault identity.key may not match this vault"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
