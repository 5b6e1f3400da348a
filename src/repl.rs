//! REPL (Read-Eval-Print Loop) for exploring chord voicings

use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Interactive REPL over a voicing session
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Repl {
            editor,
            registry: create_registry(),
            ctx: CommandContext::new(),
        })
    }

    /// Run one line through the registry and render the outcome.
    ///
    /// Returns false when the REPL should stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match self.registry.execute(line, &mut self.ctx) {
            CommandResult::Success => {}
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Exit => {
                println!("{} 🎵", "Goodbye!".bright_cyan());
                return false;
            }
            CommandResult::Error(e) => {
                println!("{} {}", "Error:".bright_red().bold(), e.red());
            }
            CommandResult::NotACommand => {
                debug!(line, "unrecognized input");
                println!(
                    "{} unknown command '{}'. Type '{}' for a list.",
                    "Error:".bright_red().bold(),
                    line,
                    "help".bright_green()
                );
            }
        }
        true
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🎵".bright_yellow(),
            "Harmony Four-Part Voicing Explorer".bright_cyan().bold()
        );
        println!(
            "Try: {}, {}, {}",
            "chord C".cyan(),
            "pin soprano E5".cyan(),
            "list".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        loop {
            let prompt = format!("{} ", "harmony>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line)?;

                    if !self.handle_line(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{} 🎵", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
