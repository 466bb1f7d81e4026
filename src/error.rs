//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the available pool.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// Fewer cards remain than were requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards still available.
        remaining: usize,
    },
}

/// Errors that can occur when comparing ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// No cards were given.
    #[error("no cards to compare")]
    EmptyInput,
}
