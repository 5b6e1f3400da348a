//! Command registry for REPL commands
//!
//! Commands are matched by prefix, longest first, and handed the rest of the line.

pub mod general;
pub mod voicing;

use crate::session::Session;

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No registered command matches the input
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Context passed to command handlers
pub struct CommandContext {
    pub session: Session,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = input[prefix.len()..].trim();
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register("chord", voicing::cmd_chord);
    registry.register("ranges", voicing::cmd_ranges);
    registry.register("pin", voicing::cmd_pin);
    registry.register("inversion", voicing::cmd_inversion);
    registry.register("clear", voicing::cmd_clear);
    registry.register("random", voicing::cmd_random);
    registry.register("seed", voicing::cmd_seed);
    registry.register("limit", voicing::cmd_limit);
    registry.register("list", voicing::cmd_list);
    registry.register("count", voicing::cmd_count);

    registry.register("status", general::cmd_status);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        let registry = create_registry();
        let mut ctx = CommandContext::new();

        assert_eq!(registry.execute("quit", &mut ctx), CommandResult::Exit);
        assert_eq!(registry.execute("exit", &mut ctx), CommandResult::Exit);
        assert_eq!(
            registry.execute("quitter", &mut ctx),
            CommandResult::NotACommand
        );
        assert_eq!(
            registry.execute("voicings", &mut ctx),
            CommandResult::NotACommand
        );
    }

    #[test]
    fn test_args_are_trimmed() {
        let registry = create_registry();
        let mut ctx = CommandContext::new();

        registry.execute("chord   Am  ", &mut ctx);
        assert_eq!(ctx.session.chord().unwrap().symbol(), "Am");
    }

    #[test]
    fn test_longest_prefix_first() {
        let registry = create_registry();
        let commands = registry.list_commands();
        assert!(commands
            .windows(2)
            .all(|pair| pair[0].len() >= pair[1].len()));
        assert!(commands.contains(&"inversion"));
    }
}
