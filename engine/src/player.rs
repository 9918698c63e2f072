use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandStrength;

/// A betting action as submitted by a strategy or the presentation layer.
/// `Raise` carries the **total** the actor wants committed this phase, not
/// the increment on top of the table bet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only legal when nothing is owed)
    Check,
    /// Match the table bet, possibly going all-in short
    Call,
    /// Raise to the given total phase commitment
    Raise(u32),
}

/// Default starting stack for a seat, in chips.
pub const STARTING_STACK: u32 = 200;

/// Everything a strategy is shown when asked for a betting action.
#[derive(Debug, Clone)]
pub struct BetContext {
    pub strength: HandStrength,
    /// Chips this seat still owes to match the table bet.
    pub to_call: u32,
    pub pot: u32,
    /// Smallest total that counts as a legal raise this phase.
    pub min_raise_total: u32,
    pub stack: u32,
    pub small_blind: u32,
}

/// Decision capability of an automated seat.
///
/// The engine calls these only on that seat's turn. Implementations must
/// stay inside the legal-action set: fold is always legal; check only when
/// [`BetContext::to_call`] is zero; call only when facing a bet with chips
/// behind; raise only when the stack covers
/// [`BetContext::min_raise_total`], with the raise total in
/// `[min_raise_total, stack]`. The engine normalizes anything outside that
/// set defensively, but a conforming strategy never relies on it.
pub trait BotStrategy: Send {
    /// Return the strategy's identifier, used in logs and seat labels.
    fn name(&self) -> &str;

    /// Choose a betting action for the current turn.
    fn bet_action(&mut self, ctx: &BetContext) -> Action;

    /// Choose distinct hand-slot indices to discard (possibly none).
    fn exchange_indices(&mut self, hand: &[Card], strength: &HandStrength) -> Vec<usize>;
}

/// Who drives a seat's decisions: the presentation layer or a strategy.
pub enum Controller {
    Human,
    Bot(Box<dyn BotStrategy>),
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::Human => write!(f, "Human"),
            Controller::Bot(s) => write!(f, "Bot({})", s.name()),
        }
    }
}

/// One seat at the table: chips, the current hand, and per-round
/// bookkeeping. Stacks persist across rounds; hand and exchange flag reset
/// on every deal. Stacks and hands are only ever mutated by the round
/// engine.
#[derive(Debug)]
pub struct Player {
    name: String,
    stack: u32,
    hand: Vec<Card>,
    has_exchanged: bool,
    controller: Controller,
}

impl Player {
    pub fn human(name: impl Into<String>, stack: u32) -> Self {
        Self::with_controller(name, stack, Controller::Human)
    }

    pub fn bot(name: impl Into<String>, stack: u32, strategy: Box<dyn BotStrategy>) -> Self {
        Self::with_controller(name, stack, Controller::Bot(strategy))
    }

    pub fn with_controller(name: impl Into<String>, stack: u32, controller: Controller) -> Self {
        Self {
            name: name.into(),
            stack,
            hand: Vec::with_capacity(5),
            has_exchanged: false,
            controller,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn has_exchanged(&self) -> bool {
        self.has_exchanged
    }

    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human)
    }

    pub(crate) fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.has_exchanged = false;
    }

    pub(crate) fn take_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn set_card(&mut self, slot: usize, card: Card) {
        self.hand[slot] = card;
    }

    pub(crate) fn mark_exchanged(&mut self) {
        self.has_exchanged = true;
    }

    /// Removes up to `amount` chips and returns what was actually paid.
    /// A short stack pays what it has; the stack never goes negative.
    pub(crate) fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        paid
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}
