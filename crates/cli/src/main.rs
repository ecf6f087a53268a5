//! modelsmith
//!
//! Command-line scaffolder for pop models and fizz migrations.

use clap::Parser;
use modelsmith_cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Log to stderr so stdout carries only the generated source.
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    modelsmith_cli::run(cli)?;
    Ok(())
}
