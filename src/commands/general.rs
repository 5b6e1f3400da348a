//! General REPL commands (help, quit, status)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `status` command
pub fn cmd_status(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let session = &ctx.session;
    let mut lines = Vec::new();

    match session.chord() {
        Some(chord) => lines.push(format!("Chord:       {}", chord)),
        None => lines.push("Chord:       (none)".to_string()),
    }
    lines.push(format!(
        "Random:      {}",
        if session.randomize { "on" } else { "off" }
    ));
    lines.push(format!(
        "Seed:        {}",
        session
            .seed
            .map_or_else(|| "off".to_string(), |seed| seed.to_string())
    ));
    lines.push(format!("Limit:       {}", session.limit));

    if session.constraints().is_empty() {
        lines.push("Constraints: (none)".to_string());
    } else {
        lines.push("Constraints:".to_string());
        for description in session.constraints().descriptions() {
            lines.push(format!("  - {}", description));
        }
    }

    CommandResult::Message(lines.join("\n"))
}

/// Print help information
fn print_help() {
    println!("{}", "🎵 Harmony Voicing Help".bold());
    println!("{}", "======================".bold());
    println!();
    println!("{}", "Chord:".green());
    println!("  {}        - Voice a chord (C, Am, F#m7, Bbdim, Gsus4, ...)", "chord G7".cyan());
    println!("  {}          - Show each voice's range and candidate notes", "ranges".cyan());
    println!();
    println!("{}", "Constraints:".green());
    println!("  {}  - Fix a voice to a note (bass/tenor/alto/soprano)", "pin soprano E5".cyan());
    println!("  {}     - Require an inversion (0 = root position)", "inversion 1".cyan());
    println!("  {}           - Drop all constraints", "clear".cyan());
    println!();
    println!("{}", "Enumeration:".green());
    println!("  {}            - Print matching voicings (bass to soprano)", "list".cyan());
    println!("  {}           - Count matching voicings", "count".cyan());
    println!("  {}    - Shuffle each voice's candidates", "random on|off".cyan());
    println!("  {}     - Fix the shuffle seed", "seed 42|off".cyan());
    println!("  {}        - Voicings shown by list", "limit 50".cyan());
    println!();
    println!("{}", "Session:".green());
    println!("  {}          - Current chord, options and constraints", "status".cyan());
    println!("  {}       - Leave", "quit, exit".cyan());
    println!();
    println!("Set {} for enumeration logs.", "RUST_LOG=debug".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::voicing::{cmd_chord, cmd_pin};

    #[test]
    fn test_status_lists_constraints() {
        let mut ctx = CommandContext::new();
        cmd_chord("Am", &mut ctx);
        cmd_pin("tenor E4", &mut ctx);

        let CommandResult::Message(status) = cmd_status("", &mut ctx) else {
            panic!("status should produce a message");
        };
        assert!(status.contains("Chord:       Am: [A, C, E]"));
        assert!(status.contains("  - tenor = E4"));
        assert!(status.contains("Seed:        off"));
    }

    #[test]
    fn test_status_without_chord() {
        let mut ctx = CommandContext::new();
        let CommandResult::Message(status) = cmd_status("", &mut ctx) else {
            panic!("status should produce a message");
        };
        assert!(status.contains("(none)"));
    }
}
