use crate::config::Config;
use crate::domain::models::{CheckItem, DoctorReport};
use crate::services::waitdb;
use std::net::ToSocketAddrs;
use std::path::Path;

pub fn env_check(config: &Config) -> DoctorReport {
    let checks = vec![
        CheckItem {
            name: "db_reachable".to_string(),
            status: if waitdb::probe(&config.db_host, config.db_port) {
                "ok"
            } else {
                "unreachable"
            }
            .to_string(),
        },
        CheckItem {
            name: "migrate_cmd".to_string(),
            status: command_status(&config.migrate_cmd),
        },
        CheckItem {
            name: "serve_cmd".to_string(),
            status: command_status(&config.serve_cmd),
        },
        CheckItem {
            name: "bind_addr".to_string(),
            status: if config.bind.to_socket_addrs().is_ok() {
                "ok"
            } else {
                "invalid"
            }
            .to_string(),
        },
    ];

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport { overall, checks }
}

fn command_status(argv: &[String]) -> String {
    match argv.first() {
        None => "empty".to_string(),
        Some(program) if resolve_program(program) => "ok".to_string(),
        Some(_) => "missing".to_string(),
    }
}

/// Paths are checked directly; bare names are looked up on PATH.
fn resolve_program(program: &str) -> bool {
    let p = Path::new(program);
    if p.components().count() > 1 {
        return p.exists();
    }
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}
