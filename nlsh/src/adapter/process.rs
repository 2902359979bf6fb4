//! Child-process adapter transport
//!
//! Spawns the adapter executable with stdin and stdout piped, writes the
//! JSON request, closes stdin to signal end-of-input, and reads stdout to
//! end-of-stream under a deadline. `kill_on_drop` guarantees the child is
//! reaped on every exit path, including the timeout branch where the wait
//! future is dropped mid-flight.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use super::{Adapter, AdapterError, Proposal, ProposalRequest, extract};

/// Default deadline for one adapter exchange
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Adapter invoked as a child process speaking JSON over pipes
pub struct ProcessAdapter {
    path: PathBuf,
    timeout: Duration,
}

impl ProcessAdapter {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    /// Run one request/response exchange, returning raw stdout
    ///
    /// The write, the read to EOF, and the wait for termination all share
    /// one deadline. A hung adapter yields `Timeout` instead of blocking
    /// the session indefinitely.
    async fn invoke(&self, payload: &str) -> Result<String, AdapterError> {
        debug!(adapter = %self.path.display(), payload_len = payload.len(), "invoke: spawning adapter");

        let mut child = Command::new(&self.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(AdapterError::Spawn)?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AdapterError::Pipe(std::io::Error::other("child stdin was not captured")))?;

        let exchange = async move {
            stdin.write_all(payload.as_bytes()).await.map_err(AdapterError::Pipe)?;
            // Dropping the handle closes the pipe; EOF tells the adapter
            // the request is complete.
            drop(stdin);
            child.wait_with_output().await.map_err(AdapterError::Pipe)
        };

        let output = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(adapter = %self.path.display(), timeout = ?self.timeout, "invoke: adapter timed out, child killed");
                return Err(AdapterError::Timeout(self.timeout));
            }
        };

        debug!(status = ?output.status, stdout_len = output.stdout.len(), "invoke: adapter exited");

        let raw = String::from_utf8_lossy(&output.stdout).to_string();
        if raw.is_empty() {
            return Err(AdapterError::Empty);
        }
        Ok(raw)
    }
}

#[async_trait]
impl Adapter for ProcessAdapter {
    async fn propose(&self, request: &ProposalRequest) -> Result<Proposal, AdapterError> {
        let payload = serde_json::to_string(request)?;
        let raw = self.invoke(&payload).await?;
        extract::extract(&raw)
    }
}
