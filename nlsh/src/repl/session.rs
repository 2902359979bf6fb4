//! Interactive session loop
//!
//! Reads a line, consults the adapter, decides, executes, and records the
//! turn. One turn fully resolves before the next prompt is shown.

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info, warn};

use crate::adapter::{Adapter, AdapterError, Proposal, ProposalRequest, Turn};
use crate::config::Config;
use crate::decision::{Engine, Outcome, Prompter, TerminalPrompter};
use crate::exec;
use crate::history::History;

/// Interactive REPL session
pub struct Session<P: Prompter> {
    adapter: Arc<dyn Adapter>,
    engine: Engine<P>,
    history: History,
    adapter_label: String,
}

impl Session<TerminalPrompter> {
    pub fn new(adapter: Arc<dyn Adapter>, config: &Config) -> Self {
        Self::with_prompter(adapter, config, TerminalPrompter)
    }
}

impl<P: Prompter> Session<P> {
    pub fn with_prompter(adapter: Arc<dyn Adapter>, config: &Config, prompter: P) -> Self {
        Self {
            adapter,
            engine: Engine::new(prompter),
            history: History::new(config.history.capacity),
            adapter_label: config.adapter.path.display().to_string(),
        }
    }

    /// Run the REPL until `exit`/`quit` or end-of-input
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&dynamic_prompt());

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if matches!(input.to_lowercase().as_str(), "exit" | "quit") {
                        println!("{} Bye!", "[Note]".bright_blue());
                        break;
                    }

                    self.handle_turn(input).await;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show a new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        Ok(())
    }

    /// Resolve one user turn end to end
    ///
    /// Adapter failures abort the turn without touching history; decided
    /// turns are recorded whatever their outcome, cancellation included.
    pub async fn handle_turn(&mut self, input: &str) {
        let request = ProposalRequest {
            prompt: input.to_string(),
            history: self.history.snapshot(),
        };

        debug!(prompt = %input, history_len = request.history.len(), "handle_turn: consulting adapter");
        let proposal = match self.adapter.propose(&request).await {
            Ok(proposal) => proposal,
            Err(e) => {
                report_adapter_error(&e);
                return;
            }
        };

        self.show_proposal(&proposal);

        match self.engine.decide(&proposal) {
            Outcome::Execute { command } => {
                info!(%command, "handle_turn: executing");
                println!("{}", "[Output]".bright_white());
                if let Err(e) = exec::run_shell(&command).await {
                    println!("{} {}", "[Error]".bright_red(), e);
                }
                println!();
            }
            Outcome::ChangeDir { target } => match exec::change_dir(&target) {
                Ok(dir) => {
                    println!("{}", "[Output]".bright_white());
                    println!("Changed directory to {}\n", dir.display());
                }
                Err(e) => {
                    println!("{} {}", "[Error]".bright_red(), e);
                }
            },
            Outcome::Cancelled => {
                println!("{} Skipping command.", "[Note]".bright_blue());
            }
        }

        // History stores what the adapter proposed, not what actually ran
        match serde_json::to_string(&proposal) {
            Ok(assistant) => self.history.push(Turn::new(input, assistant)),
            Err(e) => warn!(error = %e, "handle_turn: failed to serialize proposal for history"),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn show_proposal(&self, proposal: &Proposal) {
        println!();
        println!("{} {}", "[AI Suggestion]".bright_cyan(), "[Command]".bright_green());
        println!("{}\n", format!("$ {}", proposal.command).bright_green());
        println!("{}", "[Explanation]".bright_magenta());
        println!("{}\n", proposal.explanation);
    }

    fn print_welcome(&self) {
        println!("{} nlsh - adapter: {}", "[Note]".bright_blue(), self.adapter_label);
        println!(
            "{} Type 'exit' or 'quit' to leave. Use up-arrow for history.",
            "[Note]".bright_blue()
        );
        println!();
    }
}

/// `[user@host] - [~/path]` prompt, home abbreviated to `~`
fn dynamic_prompt() -> String {
    let user = whoami::username();
    let host = gethostname::gethostname().to_string_lossy().to_string();

    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "?".to_string());
    let cwd = match dirs::home_dir() {
        Some(home) => {
            let home = home.display().to_string();
            if cwd.starts_with(&home) {
                cwd.replacen(&home, "~", 1)
            } else {
                cwd
            }
        }
        None => cwd,
    };

    format!("{} ", format!("[{}@{}] - [{}]", user, host, cwd).bright_yellow())
}

fn report_adapter_error(err: &AdapterError) {
    match err {
        AdapterError::Parse { message, raw } => {
            println!("{} Failed to parse adapter JSON: {}", "[Error]".bright_red(), message);
            println!("Raw adapter output:\n{}", raw);
        }
        other => {
            println!("{} {}", "[Error]".bright_red(), other);
        }
    }
}
