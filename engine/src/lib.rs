//! # fivedraw-engine: Five-Card Draw Round Engine
//!
//! A deterministic five-card draw poker engine for tables of two or more
//! seats. Provides the round state machine (blinds, two betting rounds, a
//! card exchange, showdown), hand evaluation, and JSONL session logging
//! with reproducible RNG for replay and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Draw-from-top / return-to-bottom deck with seeded shuffling
//! - [`engine`] - The round state machine and turn advancement
//! - [`hand`] - Five-card hand evaluation and strength comparison
//! - [`player`] - Seat state, actions, and the bot strategy trait
//! - [`rules`] - Betting action normalization
//! - [`logger`] - RoundRecord serialization and session replay
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_engine::cards::{Card, Rank, Suit};
//! use fivedraw_engine::hand::{evaluate_hand, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//! ];
//!
//! let strength = evaluate_hand(&cards).unwrap();
//! assert_eq!(strength.category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffles come from a seeded RNG, so the same seed replays the same
//! session:
//!
//! ```rust
//! use fivedraw_engine::deck::Deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut a = Deck::new();
//! let mut b = Deck::new();
//! a.shuffle(&mut ChaCha20Rng::seed_from_u64(42));
//! b.shuffle(&mut ChaCha20Rng::seed_from_u64(42));
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
