//! Uniformly random legal play.
//!
//! Useful as a baseline opponent and for soak-testing the engine: it never
//! proposes an illegal action, but otherwise has no opinion at all.

use fivedraw_engine::cards::Card;
use fivedraw_engine::hand::HandStrength;
use fivedraw_engine::player::{Action, BetContext, BotStrategy};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Picks uniformly among the legal action kinds each turn; raise amounts
/// are drawn uniformly from the legal range.
///
/// # Example
///
/// ```rust
/// use fivedraw_ai::random::RandomStrategy;
/// use fivedraw_engine::player::BotStrategy;
///
/// let bot = RandomStrategy::new(42);
/// assert_eq!(bot.name(), "random");
/// ```
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a strategy with its own seeded RNG, independent of the
    /// engine's deck RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BotStrategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn bet_action(&mut self, ctx: &BetContext) -> Action {
        let mut options = vec![Action::Fold];
        if ctx.to_call == 0 {
            options.push(Action::Check);
        } else if ctx.stack > 0 {
            options.push(Action::Call);
        }
        if ctx.min_raise_total > 0 && ctx.stack >= ctx.min_raise_total {
            let total = self.rng.random_range(ctx.min_raise_total..=ctx.stack);
            options.push(Action::Raise(total));
        }
        options.choose(&mut self.rng).copied().unwrap_or(Action::Fold)
    }

    fn exchange_indices(&mut self, hand: &[Card], _strength: &HandStrength) -> Vec<usize> {
        let n = self.rng.random_range(0..=hand.len());
        let mut picks = rand::seq::index::sample(&mut self.rng, hand.len(), n).into_vec();
        picks.sort_unstable();
        picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_engine::hand::{Category, HandStrength};

    fn ctx(to_call: u32, min_raise_total: u32, stack: u32) -> BetContext {
        BetContext {
            strength: HandStrength {
                category: Category::HighCard,
                tiebreak: [14, 9, 7, 4, 2],
            },
            to_call,
            pot: 100,
            min_raise_total,
            stack,
            small_blind: 25,
        }
    }

    #[test]
    fn test_same_seed_plays_the_same_sequence() {
        let mut a = RandomStrategy::new(99);
        let mut b = RandomStrategy::new(99);
        for _ in 0..20 {
            assert_eq!(a.bet_action(&ctx(50, 100, 500)), b.bet_action(&ctx(50, 100, 500)));
        }
    }

    #[test]
    fn test_never_checks_facing_a_bet() {
        let mut bot = RandomStrategy::new(7);
        for _ in 0..200 {
            let action = bot.bet_action(&ctx(50, 100, 500));
            assert_ne!(action, Action::Check);
        }
    }

    #[test]
    fn test_never_calls_when_nothing_is_owed() {
        let mut bot = RandomStrategy::new(7);
        for _ in 0..200 {
            let action = bot.bet_action(&ctx(0, 50, 500));
            assert_ne!(action, Action::Call);
        }
    }

    #[test]
    fn test_raises_stay_inside_the_legal_range() {
        let mut bot = RandomStrategy::new(31);
        for _ in 0..200 {
            if let Action::Raise(total) = bot.bet_action(&ctx(50, 100, 300)) {
                assert!((100..=300).contains(&total));
            }
        }
    }

    #[test]
    fn test_never_raises_without_the_stack_for_it() {
        let mut bot = RandomStrategy::new(31);
        for _ in 0..200 {
            let action = bot.bet_action(&ctx(50, 100, 80));
            assert!(!matches!(action, Action::Raise(_)));
        }
    }

    #[test]
    fn test_exchange_picks_are_sorted_distinct_slots() {
        let mut bot = RandomStrategy::new(5);
        let hand = [
            Card::new(
                fivedraw_engine::cards::Rank::Two,
                fivedraw_engine::cards::Suit::Clubs,
            );
            5
        ];
        let strength = HandStrength {
            category: Category::HighCard,
            tiebreak: [0; 5],
        };
        for _ in 0..100 {
            let picks = bot.exchange_indices(&hand, &strength);
            assert!(picks.len() <= 5);
            assert!(picks.windows(2).all(|w| w[0] < w[1]), "sorted and distinct");
            assert!(picks.iter().all(|&i| i < 5));
        }
    }
}
