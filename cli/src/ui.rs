//! Terminal output helpers.
//!
//! Small formatting functions shared by the commands. Everything writes to
//! an injected `&mut dyn Write` so commands stay testable without a real
//! terminal.

use std::io::Write;

use fivedraw_engine::cards::Card;
use fivedraw_engine::engine::TableView;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn write_warning(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Warning: {}", msg)
}

/// Renders a hand with its slot numbers, e.g. `[0] A♠  [1] 10♥`, so the
/// player can name discards by index.
pub fn format_hand_slots(hand: &[Card]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i, c))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Writes the table snapshot the way the human sees it between prompts:
/// phase, pot, every opponent's stack, and the human seat last.
pub fn render_table(out: &mut dyn Write, view: &TableView) -> std::io::Result<()> {
    writeln!(out, "--- {} | pot {} ---", view.phase, view.pot)?;
    for opp in &view.opponents {
        let status = if opp.active { "" } else { " (folded)" };
        writeln!(out, "  {}: {} chips{}", opp.name, opp.stack, status)?;
    }
    writeln!(out, "  Your stack: {}", view.stack)?;
    if !view.hand.is_empty() {
        writeln!(out, "  Your hand:  {}", format_hand_slots(&view.hand))?;
    }
    if view.awaiting_human && view.to_call > 0 {
        writeln!(
            out,
            "  To call: {} (minimum raise total {})",
            view.to_call, view.min_raise_total
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_engine::cards::{Rank, Suit};

    #[test]
    fn test_format_hand_slots_numbers_every_card() {
        let hand = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Hearts),
        ];
        let rendered = format_hand_slots(&hand);
        assert!(rendered.contains("[0] A♠"));
        assert!(rendered.contains("[1] 10♥"));
    }

    #[test]
    fn test_write_error_prefix() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: boom\n");
    }
}
