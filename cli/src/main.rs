//! lzw
//!
//! Command-line front end: parses flags, opens files, prints the outcome.
//! All codec work lives in lzw-core.

mod args;
mod report;
mod run;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lzw_cli=info,lzw_core=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let snapshot = run::run(&cli)?;

    if cli.json {
        println!("{}", report::json(&snapshot)?);
    } else {
        println!("{}", report::summary(&cli.input, &snapshot));
    }

    Ok(())
}
