//! Card types and deck compositions.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::RankError;

/// Number of suits in a standard deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-letter symbol used when formatting cards.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered by strength from [`Rank::Two`] up to [`Rank::Ace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace (high).
    Ace,
}

impl Rank {
    /// All ranks in ascending strength.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol used when formatting cards.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Equality, hashing and ordering look at the rank only: the king of hearts
/// and the king of spades compare equal and hash identically. Use
/// [`Card::canonical_index`] or [`Card::same_suit`] when the suit matters.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Unique index in `0..DECK_SIZE`, suit-major.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, Rank::Two).canonical_index(), 0);
    /// assert_eq!(Card::new(Suit::Diamonds, Rank::Three).canonical_index(), 14);
    /// ```
    #[must_use]
    pub const fn canonical_index(&self) -> usize {
        self.suit.index() * RANK_COUNT + self.rank.index()
    }

    /// Inverse of [`Card::canonical_index`].
    ///
    /// Returns `None` if `index` is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn from_canonical_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        Some(Self::new(
            Suit::ALL[index / RANK_COUNT],
            Rank::ALL[index % RANK_COUNT],
        ))
    }

    /// Returns whether both cards have the same rank.
    #[must_use]
    pub fn same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Returns whether both cards have the same suit.
    #[must_use]
    pub fn same_suit(&self, other: &Self) -> bool {
        self.suit == other.suit
    }

    /// Rank equality, same as `==`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.same_rank(other)
    }

    /// Returns the highest rank among `cards`.
    ///
    /// Ties resolve to the earliest card.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::EmptyInput`] if `cards` is empty.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let cards = [
    ///     Card::new(Suit::Hearts, Rank::Eight),
    ///     Card::new(Suit::Hearts, Rank::King),
    ///     Card::new(Suit::Hearts, Rank::Nine),
    /// ];
    /// assert_eq!(Card::max_rank(&cards), Ok(Rank::King));
    /// ```
    pub fn max_rank(cards: &[Self]) -> Result<Rank, RankError> {
        let (first, rest) = cards.split_first().ok_or(RankError::EmptyInput)?;
        let best = rest
            .iter()
            .fold(first, |best, card| if card.rank > best.rank { card } else { best });
        Ok(best.rank)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Formats cards separated by a single space, e.g. `"Kh Qs"`.
#[must_use]
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The standard 52-card composition, suit-major and rank-minor.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Ranks of the fixed debug composition, all of hearts, in deal order.
pub const DEBUG_RANKS: [Rank; 9] = [
    Rank::King,
    Rank::Queen,
    Rank::Eight,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Ten,
    Rank::Nine,
];

/// The fixed debug composition used by [`crate::CardDeck::debug_reset`].
#[must_use]
pub fn debug_cards() -> Vec<Card> {
    DEBUG_RANKS
        .iter()
        .map(|&rank| Card::new(Suit::Hearts, rank))
        .collect()
}
