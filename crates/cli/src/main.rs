//! twinseed CLI - Seed synthetic digital twin fixtures
//!
//! Usage:
//!   twinseed                              - Seed every domain
//!   twinseed --domains aerospace,energy   - Seed selected domains
//!   twinseed --list                       - List available domains
//!   twinseed --dry-run --json             - Seed into memory, print JSON report

use clap::Parser;
use cli::commands::SeedCommand;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "twinseed")]
#[command(about = "twinseed - Populate a digital twin service with demo fixtures")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    seed: SeedCommand,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.seed.run().await
}
