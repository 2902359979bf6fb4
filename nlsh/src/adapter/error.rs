//! Adapter error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while exchanging with the adapter process
///
/// None of these are fatal to the session: every variant aborts the
/// current turn and the loop continues.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to spawn adapter: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Adapter pipe error: {0}")]
    Pipe(#[source] std::io::Error),

    #[error("Adapter returned empty output")]
    Empty,

    #[error("Adapter timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse adapter JSON: {message}")]
    Parse { message: String, raw: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdapterError {
    /// Raw adapter output, when the failure preserved it
    ///
    /// Parse failures keep the full text so it can be shown to the user
    /// for diagnosis.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            AdapterError::Parse { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Check if this failure means the adapter never produced a response
    ///
    /// Turns that end this way leave no trace in the conversation history.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AdapterError::Spawn(_) | AdapterError::Pipe(_) | AdapterError::Empty | AdapterError::Timeout(_)
        )
    }
}
