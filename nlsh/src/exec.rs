//! Shell invocation and directory changes

use std::path::PathBuf;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors from applying a proposal to the local environment
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to run shell: {0}")]
    Shell(#[source] std::io::Error),

    #[error("Failed to change directory to {path}: {source}")]
    DirectoryChange {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Hand a command string to the shell, fire-and-forget
///
/// The command runs as a single `sh -c` string; no shell syntax is parsed
/// here. The exit status is logged and otherwise ignored.
pub async fn run_shell(command: &str) -> Result<(), ExecError> {
    debug!(%command, "run_shell: spawning");
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .await
        .map_err(ExecError::Shell)?;
    debug!(?status, "run_shell: command finished");
    Ok(())
}

/// Change the process working directory
///
/// An empty target means the user's home directory. Returns the directory
/// actually switched to.
pub fn change_dir(target: &str) -> Result<PathBuf, ExecError> {
    let dir = if target.is_empty() {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
    } else {
        PathBuf::from(target)
    };

    debug!(dir = %dir.display(), "change_dir: switching");
    std::env::set_current_dir(&dir).map_err(|e| ExecError::DirectoryChange {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}
