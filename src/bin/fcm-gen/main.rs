//! fcm-gen CLI - compatibility matrix fragments from HAL instance names

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging. `check` prints its own diagnostics for skipped lines.
    let filter = if cli.verbose {
        EnvFilter::new("fcm_gen=debug")
    } else if matches!(cli.command, Commands::Check(_)) {
        EnvFilter::new("fcm_gen=error")
    } else {
        EnvFilter::new("fcm_gen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Check(args) => commands::check::execute(args, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
