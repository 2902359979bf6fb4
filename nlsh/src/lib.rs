//! nlsh - natural-language shell assistant
//!
//! nlsh turns natural-language input into shell commands by delegating
//! generation to an external, opaque adapter process, then mediates safe
//! execution of the result.
//!
//! # Core Concepts
//!
//! - **Opaque adapter**: command generation lives in a separate process
//!   speaking JSON over stdin/stdout; nlsh only supervises the exchange
//! - **Mediated execution**: every proposal passes a run/edit/cancel flow
//!   and a danger-pattern gate before touching the shell
//! - **Bounded context**: a fixed window of prior turns replays to the
//!   adapter on every request; nothing persists across sessions
//!
//! # Modules
//!
//! - [`adapter`] - adapter trait, child-process transport, JSON salvage
//! - [`safety`] - danger-pattern command classification
//! - [`decision`] - run/edit/cancel/confirm engine
//! - [`history`] - bounded rolling conversation history
//! - [`exec`] - shell invocation and directory changes
//! - [`repl`] - interactive session loop
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod adapter;
pub mod cli;
pub mod config;
pub mod decision;
pub mod exec;
pub mod history;
pub mod repl;
pub mod safety;

// Re-export commonly used types
pub use adapter::{Adapter, AdapterError, ProcessAdapter, Proposal, ProposalRequest, Turn};
pub use config::{AdapterConfig, Config, HistoryConfig};
pub use decision::{Action, Engine, Outcome, Prompter, TerminalPrompter};
pub use exec::ExecError;
pub use history::History;
pub use repl::Session;
