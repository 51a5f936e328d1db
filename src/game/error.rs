//! Errors raised while starting or playing a round

use crate::core::GuessError;

/// Errors raised by the round tracker
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("a round needs at least one turn, got {max_turns}")]
    InvalidConfiguration { max_turns: usize },

    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),
}
