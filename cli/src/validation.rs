//! Parsing of interactive user input into engine primitives.
//!
//! The presentation layer promises the engine validated values, so this is
//! where raw prompt text gets checked: betting actions with optional raise
//! totals, and exchange slot selections. Errors come back as messages to
//! re-prompt with, never as panics.

use fivedraw_engine::player::Action;

/// Outcome of parsing a betting prompt line.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// A well-formed action to feed the engine.
    Action(Action),
    /// The user asked to quit (`q` or `quit`).
    Quit,
    /// Unusable input; the message explains what to type instead.
    Invalid(String),
}

/// Parses a betting action. Accepted forms (case-insensitive): `fold`/`f`,
/// `check`/`k`, `call`/`c`, `raise <total>`/`r <total>`, `q`/`quit`. The
/// raise amount is the **total** to have committed this phase.
pub fn parse_bet_action(input: &str) -> ParseResult {
    let lowered = input.trim().to_lowercase();
    let parts: Vec<&str> = lowered.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    match head {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "k" => ParseResult::Action(Action::Check),
        "call" | "c" => ParseResult::Action(Action::Call),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise needs a total, e.g. 'raise 100'".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(total) if total > 0 => ParseResult::Action(Action::Raise(total)),
                Ok(_) => ParseResult::Invalid("Raise total must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Not a raise total: '{}'", amount)),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid: fold, check, call, raise <total>, q",
            other
        )),
    }
}

/// Parses an exchange selection: slot indices separated by spaces or
/// commas, or `none` (or an empty line) to keep the hand. Indices must be
/// distinct and inside the hand.
pub fn parse_exchange_indices(input: &str, hand_len: usize) -> Result<Vec<usize>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    let mut picks = Vec::new();
    for token in trimmed.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let slot: usize = token
            .parse()
            .map_err(|_| format!("Not a card slot: '{}'", token))?;
        if slot >= hand_len {
            return Err(format!(
                "Slot {} is out of range (0-{})",
                slot,
                hand_len.saturating_sub(1)
            ));
        }
        if picks.contains(&slot) {
            return Err(format!("Slot {} listed twice", slot));
        }
        picks.push(slot);
    }
    Ok(picks)
}
