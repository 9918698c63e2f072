//! Deal one sample hand and show its evaluation.
//!
//! A quick smoke check of deck plus evaluator, and a handy way to eyeball
//! what a seeded shuffle produces.

use std::io::Write;

use fivedraw_engine::cards::format_cards;
use fivedraw_engine::deck::Deck;
use fivedraw_engine::errors::GameError;
use fivedraw_engine::hand::evaluate_hand;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::CliError;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new();
    deck.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut hand = Vec::with_capacity(5);
    for _ in 0..5 {
        hand.push(deck.draw().ok_or(GameError::DeckExhausted)?);
    }
    let strength = evaluate_hand(&hand)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Hand: {}", format_cards(&hand))?;
    writeln!(out, "Rank: {}", strength.label())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_is_deterministic_for_a_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(42), &mut a).unwrap();
        handle_deal_command(Some(42), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_output_shape() {
        let mut out = Vec::new();
        handle_deal_command(Some(7), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Seed: 7"));
        assert!(lines[1].starts_with("Hand: "));
        assert!(lines[2].starts_with("Rank: "));
    }

    #[test]
    fn test_deal_without_seed_still_deals() {
        let mut out = Vec::new();
        handle_deal_command(None, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Hand: "));
    }
}
