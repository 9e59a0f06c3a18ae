// src/main.rs

use std::process::ExitCode;

use clap::Parser;
use movieshelf::cli::{run, CliConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Library code logs through the `log` facade; the fmt subscriber bridges it.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::parse();

    run(config)
}
