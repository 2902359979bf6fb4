//! Decision engine module
//!
//! The run/edit/cancel/confirm flow that stands between an adapter
//! proposal and the shell.

pub mod engine;
mod terminal;

pub use engine::{Action, Engine, Outcome, Prompter};
pub use terminal::TerminalPrompter;
