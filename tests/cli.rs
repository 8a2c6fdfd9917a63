use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("devup").expect("binary under test");
    // Port 1 on loopback is never listening in CI.
    cmd.env("DB_HOST", "127.0.0.1")
        .env("DB_PORT", "1")
        .env("DEVUP_MIGRATE_CMD", "/bin/sh migrate")
        .env("DEVUP_SERVE_CMD", "/bin/sh serve")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_reports_unreachable_database() {
    cmd()
        .arg("check")
        .assert()
        .code(1)
        .stdout(contains("overall: needs_attention"))
        .stdout(contains("db_reachable\tunreachable"));
}

#[test]
fn check_reports_resolvable_commands() {
    cmd()
        .arg("check")
        .assert()
        .stdout(contains("migrate_cmd\tok"))
        .stdout(contains("serve_cmd\tok"))
        .stdout(contains("bind_addr\tok"));
}

#[test]
fn check_flags_missing_command_program() {
    cmd()
        .env("DEVUP_MIGRATE_CMD", "definitely-not-a-real-program migrate")
        .arg("check")
        .assert()
        .code(1)
        .stdout(contains("migrate_cmd\tmissing"));
}

#[test]
fn check_json_envelope_carries_overall_status() {
    let out = cmd()
        .args(["--json", "check"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(v["ok"], false);
    assert_eq!(v["data"]["overall"], "needs_attention");
    let checks = v["data"]["checks"].as_array().expect("checks array");
    assert!(checks
        .iter()
        .any(|c| c["name"] == "db_reachable" && c["status"] == "unreachable"));
}

#[test]
fn rejects_non_numeric_db_port() {
    cmd()
        .env("DB_PORT", "notaport")
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("DB_PORT"));
}

#[test]
fn rejects_malformed_bind_address() {
    cmd()
        .args(["--bind", "nocolonhere", "check"])
        .assert()
        .failure()
        .stderr(contains("bind address"));
}
