//! Triage CLI - confirmation-gated label triage for a GitHub repository.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use triage_core::Config;

mod commands;
mod output;
mod prompt;

use commands::{Cli, Commands};

fn main() {
    // Read .env before anything looks at the environment
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => output::warn(&format!("Ignoring .env file: {e}")),
    }

    let cli = Cli::parse();
    let config = Config::default();

    let result = match cli.command {
        Commands::Me => commands::me::run(),
        Commands::ListBugs => commands::list_bugs::run(&config),
        Commands::CheckPrs => commands::check_prs::run(&config),
        Commands::CheckScreenshots => commands::check_screenshots::run(&config),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
