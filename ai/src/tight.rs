//! Rule-based play keyed on hand category.
//!
//! Plays the way a cautious live player would: raise made hands, call only
//! when the price is small relative to the pot, throw the rest away. All
//! decisions are deterministic, which makes simulations reproducible
//! without extra seeding.

use fivedraw_engine::cards::Card;
use fivedraw_engine::hand::{Category, HandStrength};
use fivedraw_engine::player::{Action, BetContext, BotStrategy};

/// Deterministic tight-aggressive strategy.
///
/// # Strategy
///
/// **Betting:**
/// - Three of a kind or better: raise roughly half the pot on top of the
///   legal minimum, capped by the stack; call when a raise is unaffordable
/// - At least one pair: check when free, call while the price stays under
///   the pot (or four small blinds early on), fold beyond that
/// - Anything worse: check when free, never pay
///
/// **Exchange:**
/// - Straights and better stay intact
/// - Otherwise every card outside a pair or better goes back, keeping the
///   highest card as an anchor when the hand is pure junk
#[derive(Debug, Clone, Default)]
pub struct TightStrategy;

impl TightStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl BotStrategy for TightStrategy {
    fn name(&self) -> &str {
        "tight"
    }

    fn bet_action(&mut self, ctx: &BetContext) -> Action {
        if ctx.strength.category >= Category::ThreeOfAKind {
            if ctx.min_raise_total > 0 && ctx.stack >= ctx.min_raise_total {
                let total = ctx
                    .min_raise_total
                    .saturating_add(ctx.pot / 2)
                    .min(ctx.stack);
                return Action::Raise(total);
            }
            return if ctx.to_call == 0 {
                Action::Check
            } else {
                Action::Call
            };
        }

        if ctx.strength.category >= Category::OnePair {
            if ctx.to_call == 0 {
                return Action::Check;
            }
            let ceiling = ctx.pot.max(ctx.small_blind.saturating_mul(4));
            return if ctx.to_call <= ceiling && ctx.stack > 0 {
                Action::Call
            } else {
                Action::Fold
            };
        }

        if ctx.to_call == 0 {
            Action::Check
        } else {
            Action::Fold
        }
    }

    fn exchange_indices(&mut self, hand: &[Card], strength: &HandStrength) -> Vec<usize> {
        if strength.category >= Category::Straight {
            return Vec::new();
        }
        let mut counts = [0u8; 15];
        for card in hand {
            counts[card.rank.value() as usize] += 1;
        }
        let mut picks: Vec<usize> = (0..hand.len())
            .filter(|&i| counts[hand[i].rank.value() as usize] < 2)
            .collect();
        if picks.len() == hand.len() {
            // pure junk: hold the highest card back
            if let Some(keep) = (0..hand.len()).max_by_key(|&i| hand[i].rank.value()) {
                picks.retain(|&i| i != keep);
            }
        }
        picks
    }
}
