use std::time::Duration;

pub const DEFAULT_MIGRATE_CMD: &str = "python manage.py migrate";
pub const DEFAULT_SERVE_CMD: &str = "python manage.py runserver";

/// Everything the orchestrator needs, resolved up front from the environment
/// and CLI flags. Steps never read the environment themselves.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind: String,
    pub db_host: String,
    pub db_port: u16,
    pub migrate_cmd: Vec<String>,
    pub serve_cmd: Vec<String>,
    pub wait_interval: Duration,
}

impl Config {
    pub fn from_env(bind: &str, interval_secs: u64) -> anyhow::Result<Self> {
        Self::build(
            bind,
            interval_secs,
            std::env::var("DB_HOST").ok(),
            std::env::var("DB_PORT").ok(),
            std::env::var("DEVUP_MIGRATE_CMD").ok(),
            std::env::var("DEVUP_SERVE_CMD").ok(),
        )
    }

    fn build(
        bind: &str,
        interval_secs: u64,
        db_host: Option<String>,
        db_port: Option<String>,
        migrate_cmd: Option<String>,
        serve_cmd: Option<String>,
    ) -> anyhow::Result<Self> {
        validate_bind(bind)?;

        let db_host = db_host.unwrap_or_else(|| "localhost".to_string());
        let db_port = db_port
            .unwrap_or_else(|| "5432".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("DB_PORT must be a port number"))?;

        let migrate_cmd = split_cmd(&migrate_cmd.unwrap_or_else(|| DEFAULT_MIGRATE_CMD.to_string()));
        let serve_cmd = split_cmd(&serve_cmd.unwrap_or_else(|| DEFAULT_SERVE_CMD.to_string()));
        if migrate_cmd.is_empty() {
            anyhow::bail!("DEVUP_MIGRATE_CMD must not be empty");
        }
        if serve_cmd.is_empty() {
            anyhow::bail!("DEVUP_SERVE_CMD must not be empty");
        }

        Ok(Self {
            bind: bind.to_string(),
            db_host,
            db_port,
            migrate_cmd,
            serve_cmd,
            wait_interval: Duration::from_secs(interval_secs),
        })
    }
}

fn validate_bind(bind: &str) -> anyhow::Result<()> {
    match bind.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(()),
        _ => anyhow::bail!("bind address must be HOST:PORT, got `{}`", bind),
    }
}

/// Whitespace-split argv. Quoted arguments are not supported.
fn split_cmd(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
