use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid rank value: {0} (must be 2..=14)")]
    InvalidRank(u8),
    #[error("Invalid suit symbol: {0:?}")]
    InvalidSuit(char),
    #[error("Hand must hold exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("Deck exhausted: a draw was requested with no cards remaining")]
    DeckExhausted,
    #[error("No betting action is pending")]
    NoPendingAction,
    #[error("No exchange is pending")]
    NoPendingExchange,
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("The game is over; no further rounds can start")]
    GameOver,
}
