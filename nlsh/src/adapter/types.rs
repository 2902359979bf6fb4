//! Adapter protocol types
//!
//! The JSON payloads exchanged with the adapter process over stdin/stdout.

use serde::{Deserialize, Serialize};

/// One completed exchange: the user's input paired with the adapter's reply
///
/// The assistant field stores the adapter's *entire* serialized response,
/// not just the command, so replaying history preserves the full prior
/// structure on the adapter side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}

/// Request payload written to the adapter's stdin
///
/// Built fresh each turn from the current input and a snapshot of the
/// conversation history taken before the turn is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalRequest {
    pub prompt: String,
    pub history: Vec<Turn>,
}

/// Command proposal parsed from the adapter's stdout
///
/// Every field is optional on the wire. A missing field resolves to its
/// default rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proposal {
    pub command: String,
    pub explanation: String,
    pub confirm: bool,
}
