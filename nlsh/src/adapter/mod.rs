//! Adapter client module
//!
//! Everything that talks to the external adapter process: request
//! serialization, child-process transport over pipes, and salvage of the
//! JSON reply from noisy output.

pub mod client;
mod error;
pub mod extract;
mod process;
mod types;

pub use client::Adapter;
pub use error::AdapterError;
pub use extract::extract;
pub use process::{DEFAULT_TIMEOUT_MS, ProcessAdapter};
pub use types::{Proposal, ProposalRequest, Turn};
