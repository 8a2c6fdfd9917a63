use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod services;

use cli::{Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let interval_secs = match &cli.command {
        Commands::Up { interval_secs, .. } | Commands::WaitDb { interval_secs } => *interval_secs,
        _ => 1,
    };
    let config = Config::from_env(&cli.bind, interval_secs)?;

    let code = match &cli.command {
        Commands::Check => commands::handle_check(&cli, &config)?,
        _ => commands::handle_runtime_commands(&cli, &config)?,
    };
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_tracing() {
    // Default to warn so the entrypoint stays quiet unless RUST_LOG says otherwise.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
