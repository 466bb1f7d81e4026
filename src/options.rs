//! Deck configuration options.

/// Algorithm used to randomize the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleAlgorithm {
    /// In-place Fisher-Yates swap shuffle.
    #[default]
    FisherYates,
    /// Repeatedly extract a uniformly random card from a pool and append it
    /// to the deck until the pool is empty.
    Extraction,
}

/// Configuration options for a [`CardDeck`](crate::CardDeck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, ShuffleAlgorithm};
///
/// let options = DeckOptions::default()
///     .with_shuffle(ShuffleAlgorithm::Extraction)
///     .with_shuffle_on_reset(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Shuffle algorithm.
    pub shuffle: ShuffleAlgorithm,
    /// Whether [`CardDeck::reset`](crate::CardDeck::reset) reshuffles the
    /// restored composition.
    pub shuffle_on_reset: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            shuffle: ShuffleAlgorithm::FisherYates,
            shuffle_on_reset: true,
        }
    }
}

impl DeckOptions {
    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, ShuffleAlgorithm};
    ///
    /// let options = DeckOptions::default().with_shuffle(ShuffleAlgorithm::Extraction);
    /// assert_eq!(options.shuffle, ShuffleAlgorithm::Extraction);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, algorithm: ShuffleAlgorithm) -> Self {
        self.shuffle = algorithm;
        self
    }

    /// Sets whether resetting the deck reshuffles it.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_reset(false);
    /// assert_eq!(options.shuffle_on_reset, false);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_reset(mut self, shuffle: bool) -> Self {
        self.shuffle_on_reset = shuffle;
        self
    }
}
