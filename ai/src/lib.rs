//! # fivedraw-ai: Bot Strategies for Five-Card Draw
//!
//! Provides automated opponents for the five-card draw engine. Every
//! strategy implements [`BotStrategy`] from the engine crate, so seats can
//! mix humans and bots freely.
//!
//! ## Core Components
//!
//! - [`random`] - Uniformly random legal play, useful as a baseline
//! - [`tight`] - Rule-based play keyed on hand category
//! - [`create_strategy`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_ai::create_strategy;
//!
//! let bot = create_strategy("random", 42).expect("known strategy");
//! assert_eq!(bot.name(), "random");
//! ```
//!
//! ## Strategy Types
//!
//! Currently supported strategies:
//! - `"random"` - Picks uniformly among the legal actions each turn
//! - `"tight"` - Raises made hands, calls cheap with a pair, folds junk

use fivedraw_engine::player::BotStrategy;

pub mod random;
pub mod tight;

/// Names accepted by [`create_strategy`], in display order.
pub const STRATEGY_NAMES: [&str; 2] = ["random", "tight"];

/// Factory function to create a strategy by name.
///
/// # Arguments
///
/// * `name` - Strategy identifier (see [`STRATEGY_NAMES`])
/// * `seed` - RNG seed for strategies that randomize; deterministic
///   strategies ignore it
///
/// # Returns
///
/// The boxed strategy, or `None` for an unknown name so callers can report
/// the valid set themselves.
///
/// # Example
///
/// ```rust
/// use fivedraw_ai::create_strategy;
///
/// assert!(create_strategy("tight", 0).is_some());
/// assert!(create_strategy("bluffmaster", 0).is_none());
/// ```
pub fn create_strategy(name: &str, seed: u64) -> Option<Box<dyn BotStrategy>> {
    match name {
        "random" => Some(Box::new(random::RandomStrategy::new(seed))),
        "tight" => Some(Box::new(tight::TightStrategy::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_knows_every_listed_strategy() {
        for name in STRATEGY_NAMES {
            let bot = create_strategy(name, 1).expect("listed strategies must construct");
            assert_eq!(bot.name(), name);
        }
    }

    #[test]
    fn test_factory_rejects_unknown_names() {
        assert!(create_strategy("", 1).is_none());
        assert!(create_strategy("Random", 1).is_none(), "names are case-sensitive");
    }
}
