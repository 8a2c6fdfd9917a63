use std::process::{Command, ExitStatus};

#[derive(thiserror::Error, Debug)]
pub enum StepError {
    #[error("empty command")]
    Empty,
    #[error("failed to launch `{0}`: {1}")]
    Spawn(String, #[source] std::io::Error),
}

/// Runs an argv in the foreground, inheriting stdio, and returns the child's
/// exit code once it terminates.
pub fn run_step(argv: &[String]) -> Result<i32, StepError> {
    let (program, args) = argv.split_first().ok_or(StepError::Empty)?;
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| StepError::Spawn(program.clone(), e))?;
    Ok(exit_code(&status))
}

/// Shell convention: a child killed by signal N reports 128 + N.
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
