use crate::config::Config;
use crate::services::process::run_step;
use crate::services::waitdb;

/// The entrypoint sequence: optional dependency wait, then migrate, then the
/// foreground server. The first non-zero exit code wins; later steps are not
/// attempted and nothing is retried.
pub fn run(config: &Config, wait_db: bool) -> anyhow::Result<i32> {
    if wait_db {
        waitdb::wait_until_reachable(&config.db_host, config.db_port, config.wait_interval);
    }

    let code = migrate(config)?;
    if code != 0 {
        tracing::debug!(code, "migration failed, not starting server");
        return Ok(code);
    }

    serve(config)
}

pub fn migrate(config: &Config) -> anyhow::Result<i32> {
    tracing::debug!(cmd = ?config.migrate_cmd, "applying migrations");
    Ok(run_step(&config.migrate_cmd)?)
}

/// Runs the development server with the bind address appended as its final
/// argument. Blocks until the server process exits.
pub fn serve(config: &Config) -> anyhow::Result<i32> {
    let mut argv = config.serve_cmd.clone();
    argv.push(config.bind.clone());
    tracing::debug!(cmd = ?argv, "starting development server");
    Ok(run_step(&argv)?)
}
