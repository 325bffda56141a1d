//! Gravamen binary entry point.
//!
//! Parses the CLI, installs the tracing subscriber, and dispatches.

use clap::Parser;
use gravamen::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Install the global tracing subscriber.
///
/// `GRAVAMEN_LOG` overrides the default `info` filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GRAVAMEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
