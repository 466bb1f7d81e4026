//! The card deck and its shuffle and draw operations.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, debug_cards, standard_cards};
use crate::error::DrawError;
use crate::options::{DeckOptions, ShuffleAlgorithm};

/// A deck of cards split into an available pool and a used pool.
///
/// Both pools live in one owned sequence. Cards before the cursor have been
/// dealt, in deal order; cards from the cursor onward are still available, in
/// draw order. A card therefore belongs to exactly one pool, and drawing only
/// moves the cursor.
///
/// # Example
///
/// ```
/// use deckrs::{CardDeck, DECK_SIZE};
///
/// let mut deck = CardDeck::with_seed(7);
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.used(), &[card]);
/// assert_eq!(deck.remaining(), DECK_SIZE - 1);
/// ```
#[derive(Debug, Clone)]
pub struct CardDeck {
    cards: Vec<Card>,
    cursor: usize,
    options: DeckOptions,
    rng: ChaCha8Rng,
}

impl CardDeck {
    /// Creates a shuffled standard deck seeded from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the operating system random source is unavailable.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(DeckOptions::default(), ChaCha8Rng::from_os_rng())
    }

    /// Creates a shuffled standard deck with default options and the given seed.
    ///
    /// The same seed always produces the same card order.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_options(DeckOptions::default(), seed)
    }

    /// Creates a shuffled standard deck with the given options and seed.
    #[must_use]
    pub fn with_options(options: DeckOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(options: DeckOptions, rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: standard_cards(),
            cursor: 0,
            options,
            rng,
        };
        debug!(cards = deck.cards.len(), "created deck");
        deck.shuffle();
        deck
    }

    /// Randomizes the whole composition and returns every card to the
    /// available pool.
    pub fn shuffle(&mut self) {
        self.cursor = 0;
        match self.options.shuffle {
            ShuffleAlgorithm::FisherYates => self.cards.shuffle(&mut self.rng),
            ShuffleAlgorithm::Extraction => self.extraction_shuffle(),
        }
        debug!(
            cards = self.cards.len(),
            algorithm = ?self.options.shuffle,
            "shuffled deck"
        );
    }

    fn extraction_shuffle(&mut self) {
        let mut pool = core::mem::take(&mut self.cards);
        self.cards.reserve_exact(pool.len());
        while !pool.is_empty() {
            let index = self.rng.random_range(0..pool.len());
            self.cards.push(pool.swap_remove(index));
        }
    }

    /// Draws the first available card and moves it to the used pool.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if no cards are available. The
    /// deck is left untouched; call [`CardDeck::shuffle`] or
    /// [`CardDeck::reset`] before drawing again.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let Some(&card) = self.cards.get(self.cursor) else {
            debug!(dealt = self.cursor, "draw from exhausted deck");
            return Err(DrawError::DeckExhausted);
        };
        self.cursor += 1;
        trace!(%card, remaining = self.remaining(), "drew card");
        Ok(card)
    }

    /// Draws `count` cards at once.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] without drawing anything if fewer
    /// than `count` cards are available.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(DrawError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }
        let start = self.cursor;
        self.cursor += count;
        trace!(count, remaining = self.remaining(), "drew cards");
        Ok(self.cards[start..self.cursor].to_vec())
    }

    /// Returns the card the next [`CardDeck::draw`] would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// Restores the standard 52-card composition and clears the used pool.
    ///
    /// The deck is reshuffled unless [`DeckOptions::shuffle_on_reset`] is
    /// disabled, in which case it is left in canonical order.
    pub fn reset(&mut self) {
        self.cards = standard_cards();
        self.cursor = 0;
        debug!(cards = self.cards.len(), "reset deck");
        if self.options.shuffle_on_reset {
            self.shuffle();
        }
    }

    /// Replaces the composition with the fixed debug list and clears the
    /// used pool.
    ///
    /// The debug list is nine hearts (king, queen, eight, jack, queen, king,
    /// ace, ten, nine) dealt in exactly that order. No randomness is used.
    pub fn debug_reset(&mut self) {
        self.cards = debug_cards();
        self.cursor = 0;
        debug!(cards = self.cards.len(), "loaded debug composition");
    }

    /// Cards not yet dealt, in draw order.
    #[must_use]
    pub fn available(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }

    /// Cards already dealt, in deal order.
    #[must_use]
    pub fn used(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Number of cards still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Number of cards already dealt.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.cursor
    }

    /// Total number of cards in the composition, available and used.
    #[must_use]
    pub fn composition_len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }
}

#[cfg(feature = "std")]
impl Default for CardDeck {
    fn default() -> Self {
        Self::new()
    }
}
