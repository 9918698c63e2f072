//! Error types for the CLI.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`]
//! maps the variants onto process exit codes (2 for errors, 130 when the
//! user or a closed stdin interrupts an interactive prompt).

use fivedraw_engine::errors::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// File or stream I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The engine rejected an operation.
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// An interactive prompt was interrupted (quit, or stdin closed).
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_game_error_converts() {
        let err: CliError = GameError::DeckExhausted.into();
        assert!(err.to_string().contains("Deck exhausted"));
    }
}
