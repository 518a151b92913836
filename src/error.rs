//! Error types for deck access and card parsing.

use thiserror::Error;

/// Errors that can occur when reading from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Position lies outside `[-len, len - 1]`.
    #[error("deck index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: isize,
        /// The deck length.
        len: usize,
    },
}

/// Errors that can occur when parsing card labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Unknown rank label.
    #[error("unknown card rank")]
    Rank,
    /// Unknown suit name.
    #[error("unknown card suit")]
    Suit,
}
