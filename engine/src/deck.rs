use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};

/// Draw pile for a single round. Cards leave from the top and discards
/// return to the bottom, so deck plus hands always cover the same 52 cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: VecDeque::from(full_deck()),
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn return_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
