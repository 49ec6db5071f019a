//! # Game Error Types Module
//!
//! Error types for the blackjack game core. Every error is scoped to a
//! single interaction; none is fatal to the process.

use crate::session::Phase;

/// Errors the game flow can surface to the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An action arrived for a player with no active game.
    SessionNotFound,
    /// An action arrived while the session was not in the expected phase.
    InvalidTransition(Phase),
    /// The card source was unreachable or returned malformed data.
    CardSource(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::SessionNotFound => write!(f, "no active game session for this player"),
            GameError::InvalidTransition(phase) => {
                write!(f, "action not allowed in the {phase:?} phase")
            }
            GameError::CardSource(msg) => write!(f, "card source error: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<reqwest::Error> for GameError {
    fn from(err: reqwest::Error) -> Self {
        GameError::CardSource(err.to_string())
    }
}
