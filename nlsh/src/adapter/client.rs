//! Adapter trait definition

use async_trait::async_trait;

use super::{AdapterError, Proposal, ProposalRequest};

/// Source of command proposals
///
/// One call per user turn. The adapter holds no session state of its own -
/// prior exchanges travel inside the request's history, so each call is
/// independent.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Exchange one request for one parsed proposal
    async fn propose(&self, request: &ProposalRequest) -> Result<Proposal, AdapterError>;
}
