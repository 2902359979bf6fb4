//! Terminal prompter backed by stdin

use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::{Action, Prompter};

/// Prompter that asks on the controlling terminal
///
/// Reads plain lines from stdin; the main input line is the only place
/// that gets full line editing.
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(&self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_string()
    }
}

impl Prompter for TerminalPrompter {
    fn choose_action(&mut self) -> Action {
        print!("{} Run as-is (r), edit (e), or cancel (c)? ", "[Action]".bright_cyan());
        let _ = io::stdout().flush();
        Action::parse(&self.read_line())
    }

    fn edit_command(&mut self) -> Option<String> {
        print!("{} Enter new command: ", "[Note]".bright_blue());
        let _ = io::stdout().flush();
        let line = self.read_line();
        if line.is_empty() { None } else { Some(line) }
    }

    fn confirm_danger(&mut self, command: &str) -> bool {
        println!("{} This command looks potentially dangerous.", "[Error]".bright_red());
        println!("{}", format!("$ {}", command).red());
        print!("Confirm execution? (y/N): ");
        let _ = io::stdout().flush();

        let answer = self.read_line().to_lowercase();
        answer == "y" || answer == "yes"
    }
}
