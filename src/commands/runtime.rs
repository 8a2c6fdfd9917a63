use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::services::{orchestrate, waitdb};

pub fn handle_runtime_commands(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Up { wait_db, .. } => orchestrate::run(config, *wait_db),
        Commands::Migrate => orchestrate::migrate(config),
        Commands::Serve => orchestrate::serve(config),
        Commands::WaitDb { .. } => {
            waitdb::wait_until_reachable(&config.db_host, config.db_port, config.wait_interval);
            Ok(0)
        }
        Commands::Check => anyhow::bail!("use `devup check`"),
    }
}
