//! Readcraft - readability analysis CLI for Minecraft Education worlds
//!
//! Unpacks the language files from an .mcworld/.mctemplate archive and
//! scores the text with seven classic readability formulas.

use anyhow::Result;
use clap::Parser;
use readcraft::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG overrides --log-level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
