//! Per-turn decision engine
//!
//! Drives a proposal from `Proposed` to a terminal outcome: execute,
//! change directory, or cancel. Interactive questions go through the
//! [`Prompter`] trait so the flow is testable without a terminal.

use tracing::debug;

use crate::adapter::Proposal;
use crate::safety;

/// User's choice at the action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run,
    Edit,
    Cancel,
}

impl Action {
    /// Parse a raw answer; unrecognized input runs the command as-is
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "c" | "cancel" => Action::Cancel,
            "e" | "edit" => Action::Edit,
            _ => Action::Run,
        }
    }
}

/// Terminal decision for one proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Hand the command to the shell
    Execute { command: String },
    /// Change the working directory instead of executing
    ChangeDir { target: String },
    /// Skip the command entirely
    Cancelled,
}

/// Interactive questions asked while deciding a proposal
pub trait Prompter {
    /// Run / edit / cancel choice
    fn choose_action(&mut self) -> Action;

    /// Replacement command text; `None` keeps the original
    fn edit_command(&mut self) -> Option<String>;

    /// Explicit confirmation for a risky command
    fn confirm_danger(&mut self, command: &str) -> bool;
}

/// Run/edit/cancel/confirm flow for one proposal per turn
pub struct Engine<P: Prompter> {
    prompter: P,
}

impl<P: Prompter> Engine<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Decide what to do with a proposal
    ///
    /// Directory changes are a distinguished command kind: they skip the
    /// action prompt and the pattern classifier, but an adapter-declared
    /// `confirm` still gates them like any other proposal.
    pub fn decide(&mut self, proposal: &Proposal) -> Outcome {
        if let Some(target) = change_dir_target(&proposal.command) {
            debug!(%target, "decide: directory-change proposal");
            if proposal.confirm && !self.prompter.confirm_danger(&proposal.command) {
                return Outcome::Cancelled;
            }
            return Outcome::ChangeDir { target };
        }

        let mut command = proposal.command.clone();
        match self.prompter.choose_action() {
            Action::Cancel => {
                debug!("decide: cancelled at action prompt");
                return Outcome::Cancelled;
            }
            Action::Edit => {
                // Empty replacement input keeps the proposed command
                if let Some(replacement) = self.prompter.edit_command()
                    && !replacement.is_empty()
                {
                    debug!(%replacement, "decide: command edited");
                    command = replacement;
                }
            }
            Action::Run => {}
        }

        // The danger gate sees the command as it will actually run
        if (proposal.confirm || safety::is_dangerous(&command)) && !self.prompter.confirm_danger(&command) {
            debug!(%command, "decide: danger confirmation declined");
            return Outcome::Cancelled;
        }

        Outcome::Execute { command }
    }
}

/// Recognize a change-directory proposal and extract its target
///
/// Returns the target path text; empty means the home directory.
fn change_dir_target(command: &str) -> Option<String> {
    let trimmed = command.trim_start();
    if trimmed.trim_end() == "cd" {
        return Some(String::new());
    }
    trimmed.strip_prefix("cd ").map(|rest| rest.trim().to_string())
}

#[cfg(test)]
pub mod scripted {
    use std::collections::VecDeque;

    use super::*;

    /// Scripted prompter for unit tests
    ///
    /// Pops prepared answers and counts how often each question was asked.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        pub actions: VecDeque<Action>,
        pub edits: VecDeque<Option<String>>,
        pub confirms: VecDeque<bool>,
        pub actions_asked: usize,
        pub confirms_asked: usize,
    }

    impl ScriptedPrompter {
        pub fn running() -> Self {
            Self {
                actions: VecDeque::from([Action::Run]),
                ..Default::default()
            }
        }

        pub fn cancelling() -> Self {
            Self {
                actions: VecDeque::from([Action::Cancel]),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn choose_action(&mut self) -> Action {
            self.actions_asked += 1;
            self.actions.pop_front().unwrap_or(Action::Run)
        }

        fn edit_command(&mut self) -> Option<String> {
            self.edits.pop_front().flatten()
        }

        fn confirm_danger(&mut self, _command: &str) -> bool {
            self.confirms_asked += 1;
            self.confirms.pop_front().unwrap_or(false)
        }
    }
}
