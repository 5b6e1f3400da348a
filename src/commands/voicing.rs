//! Voicing commands (chord, pin, inversion, list, ...)

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use harmony_core::solver::{
    checked_inversion_constraint, pinned_voice_constraint, ChordEnumerator, Constraint,
    VoiceType,
};
use harmony_core::types::{Chord, Note};

fn require_enumerator(ctx: &CommandContext) -> Result<ChordEnumerator, CommandResult> {
    ctx.session.enumerator().ok_or_else(|| {
        CommandResult::Error("No chord selected. Use: chord <symbol>".to_string())
    })
}

/// Handle `chord [symbol]` command
pub fn cmd_chord(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return match ctx.session.chord() {
            Some(chord) => CommandResult::Message(format!("Current chord: {}", chord)),
            None => CommandResult::Error("Usage: chord <symbol>  (e.g. C, Am, G7)".into()),
        };
    }

    match Chord::parse(args) {
        Ok(chord) => {
            let count = ChordEnumerator::new(chord.clone()).combination_count();
            let message = format!("Chord set to {} ({} voicings)", chord, count);
            ctx.session.set_chord(chord);
            CommandResult::Message(message.bright_green().to_string())
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `ranges` command
pub fn cmd_ranges(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let enumerator = match require_enumerator(ctx) {
        Ok(enumerator) => enumerator,
        Err(result) => return result,
    };

    let lines: Vec<String> = VoiceType::ALL
        .iter()
        .map(|&voice| {
            let (low, high) = voice.bounds();
            let candidates: Vec<String> = enumerator
                .notes_in_range(voice)
                .iter()
                .map(Note::to_string)
                .collect();
            format!(
                "{:<8} {}-{} ({}): {}",
                voice.name(),
                low,
                high,
                candidates.len(),
                candidates.join(" ")
            )
        })
        .collect();

    CommandResult::Message(lines.join("\n"))
}

/// Handle `pin <voice> <note>` command
pub fn cmd_pin(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let enumerator = match require_enumerator(ctx) {
        Ok(enumerator) => enumerator,
        Err(result) => return result,
    };

    let parts: Vec<&str> = args.split_whitespace().collect();
    let [voice, note] = parts.as_slice() else {
        return CommandResult::Error(
            "Usage: pin <voice> <note>  (e.g. pin soprano E5)".to_string(),
        );
    };

    let voice: VoiceType = match voice.parse() {
        Ok(voice) => voice,
        Err(e) => return CommandResult::Error(e.to_string()),
    };
    let note: Note = match note.parse() {
        Ok(note) => note,
        Err(e) => return CommandResult::Error(e.to_string()),
    };

    let description = format!("{} = {}", voice, note);
    ctx.session
        .constraints_mut()
        .push(description.clone(), pinned_voice_constraint(voice, note));

    if enumerator.notes_in_range(voice).contains(&note) {
        CommandResult::Message(format!("Added constraint: {}", description))
    } else {
        CommandResult::Message(format!(
            "Added constraint: {} ({})",
            description,
            "not a candidate for this voice, nothing will match".yellow()
        ))
    }
}

/// Handle `inversion <n>` command
pub fn cmd_inversion(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let Some(chord) = ctx.session.chord().cloned() else {
        return CommandResult::Error("No chord selected. Use: chord <symbol>".to_string());
    };

    let Ok(inversion) = args.parse::<usize>() else {
        return CommandResult::Error(
            "Usage: inversion <n>  (0 = root position, 1 = first, ...)".to_string(),
        );
    };

    match checked_inversion_constraint(&chord, inversion) {
        Ok(constraint) => {
            let bass = chord
                .member(inversion)
                .map(|pc| pc.to_string())
                .unwrap_or_default();
            let description = format!("inversion {} (bass on {})", inversion, bass);
            ctx.session
                .constraints_mut()
                .push(description.clone(), constraint);
            CommandResult::Message(format!("Added constraint: {}", description))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `clear` command
pub fn cmd_clear(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let removed = ctx.session.constraints().len();
    ctx.session.constraints_mut().clear();
    CommandResult::Message(format!("Cleared {} constraint(s)", removed))
}

/// Handle `random [on|off]` command
pub fn cmd_random(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args {
        "" => {}
        "on" => ctx.session.randomize = true,
        "off" => ctx.session.randomize = false,
        _ => return CommandResult::Error("Usage: random [on|off]".to_string()),
    }
    let state = if ctx.session.randomize { "on" } else { "off" };
    CommandResult::Message(format!("Random order: {}", state))
}

/// Handle `seed <n|off>` command
pub fn cmd_seed(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args == "off" {
        ctx.session.seed = None;
        return CommandResult::Message("Seed cleared; shuffles use fresh entropy".to_string());
    }

    match args.parse::<u64>() {
        Ok(seed) => {
            ctx.session.seed = Some(seed);
            CommandResult::Message(format!("Seed set to {}", seed))
        }
        Err(_) => CommandResult::Error("Usage: seed <number|off>".to_string()),
    }
}

/// Handle `limit <n>` command
pub fn cmd_limit(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Limit: {}", ctx.session.limit));
    }

    match args.parse::<usize>() {
        Ok(limit) if limit > 0 => {
            ctx.session.limit = limit;
            CommandResult::Message(format!("Limit set to {}", limit))
        }
        _ => CommandResult::Error("Limit must be a positive number".to_string()),
    }
}

/// Handle `list` command
pub fn cmd_list(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let enumerator = match require_enumerator(ctx) {
        Ok(enumerator) => enumerator,
        Err(result) => return result,
    };
    let constraints = ctx.session.constraints();

    let lines: Vec<String> = enumerator
        .generate()
        .filter(|voicing| constraints.is_satisfied(voicing))
        .take(ctx.session.limit)
        .enumerate()
        .map(|(i, voicing)| format!("{:>4}. {}", i + 1, voicing.colored_string()))
        .collect();

    if lines.is_empty() {
        return CommandResult::Message("No voicings match the current constraints".to_string());
    }
    CommandResult::Message(lines.join("\n"))
}

/// Handle `count` command
pub fn cmd_count(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let enumerator = match require_enumerator(ctx) {
        Ok(enumerator) => enumerator,
        Err(result) => return result,
    };
    let constraints = ctx.session.constraints();

    let total = enumerator.combination_count();
    let matching = enumerator
        .generate()
        .filter(|voicing| constraints.is_satisfied(voicing))
        .count();

    CommandResult::Message(format!("{} of {} voicings match", matching, total))
}
