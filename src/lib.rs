//! A playing-card deck container and a 2D vector type, with optional `no_std` support.
//!
//! [`CardDeck`] behaves like a read-only sequence: it has a length, supports
//! signed indexing, clipped slicing, and reverse iteration. [`Vector2D`] is a
//! small value type that prints, measures, adds, and scales through the usual
//! operator traits.
//!
//! # Example
//!
//! ```
//! use deckvec::{CardDeck, Vector2D};
//!
//! let deck = CardDeck::new();
//! assert_eq!(deck.size(), 52);
//! assert_eq!(deck.rev().count(), 52);
//!
//! let v = Vector2D::new(4.0, 2.0) + Vector2D::new(3.0, 1.0);
//! assert_eq!(v.to_string(), "Vector2D(7, 3)");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod vector;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardDeck, ReverseCards};
pub use error::{DeckError, ParseCardError};
pub use vector::Vector2D;
