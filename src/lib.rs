//! Standard 52-card deck primitives with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type with rank comparison helpers and a
//! [`CardDeck`] that shuffles itself on construction and deals cards one at a
//! time from its available pool into its used pool.
//!
//! # Example
//!
//! ```
//! use deckrs::{CardDeck, DrawError, DECK_SIZE};
//!
//! let mut deck = CardDeck::with_seed(42);
//! for _ in 0..DECK_SIZE {
//!     deck.draw().unwrap();
//! }
//! assert_eq!(deck.draw(), Err(DrawError::DeckExhausted));
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
pub mod label;
pub mod options;

// Re-export main types
pub use card::{
    Card, DEBUG_RANKS, DECK_SIZE, RANK_COUNT, Rank, SUIT_COUNT, Suit, debug_cards, format_cards,
    standard_cards,
};
pub use deck::CardDeck;
pub use error::{DrawError, RankError};
pub use label::{Content, Label, Visibility};
pub use options::{DeckOptions, ShuffleAlgorithm};
