//! swindex: CLI for pattern-based declaration indexing

use clap::Parser;
use swindex_cli::Cli;
use swindex_cli::commands;
use swindex_cli::logging::setup_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let output = commands::index::run(&cli.to_config())?;
    println!("Index written to: {}", output.display());

    Ok(())
}
