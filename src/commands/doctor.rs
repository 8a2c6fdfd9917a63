use crate::cli::Cli;
use crate::config::Config;
use crate::domain::models::JsonOut;
use crate::services::doctor::env_check;

pub fn handle_check(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    let report = env_check(config);
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.overall == "ok",
                data: &report
            })?
        );
    } else {
        println!("overall: {}", report.overall);
        for c in &report.checks {
            println!("{}\t{}", c.name, c.status);
        }
    }
    Ok(if report.overall == "ok" { 0 } else { 1 })
}
