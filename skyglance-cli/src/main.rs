//! Binary crate for the `skyglance` city-weather widget.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search loop (the widget's "search bar")
//! - Terminal notices and the terminal map view

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
