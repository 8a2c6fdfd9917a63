use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join("invocations.log")
    }

    /// Writes an executable that appends its own name and argv to the shared
    /// invocation log, then exits with `code`.
    pub fn fake_cmd(&self, name: &str, code: i32) -> PathBuf {
        let path = self.dir.join(name);
        let script = format!(
            "#!/bin/sh\necho \"{} $@\" >> \"{}\"\nexit {}\n",
            name,
            self.log_path().display(),
            code
        );
        fs::write(&path, script).expect("write fake command");
        let mut perms = fs::metadata(&path)
            .expect("stat fake command")
            .permissions();
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod fake command");
        path
    }

    pub fn cmd(&self, migrate: &PathBuf, serve: &PathBuf) -> Command {
        let mut cmd = Command::cargo_bin("devup").expect("binary under test");
        cmd.env("DEVUP_MIGRATE_CMD", migrate.display().to_string())
            .env("DEVUP_SERVE_CMD", serve.display().to_string())
            .env("DB_HOST", "127.0.0.1")
            .env("DB_PORT", "5432")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn log_lines(&self) -> Vec<String> {
        let raw = fs::read_to_string(self.log_path()).unwrap_or_default();
        raw.lines().map(str::to_string).collect()
    }
}
