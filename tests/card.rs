//! Card integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, DECK_SIZE, Rank, RankError, Suit, debug_cards, format_cards, standard_cards,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn equality_ignores_suit() {
    assert!(card(Suit::Hearts, Rank::King).equals(&card(Suit::Spades, Rank::King)));
    assert!(!card(Suit::Hearts, Rank::King).equals(&card(Suit::Hearts, Rank::Queen)));
    assert_eq!(card(Suit::Clubs, Rank::Two), card(Suit::Diamonds, Rank::Two));
}

#[test]
fn hash_follows_rank_equality() {
    let set: HashSet<Card> = standard_cards().into_iter().collect();
    assert_eq!(set.len(), Rank::ALL.len());
    assert!(set.contains(&card(Suit::Spades, Rank::Ace)));
}

#[test]
fn same_rank_and_same_suit() {
    let a = card(Suit::Hearts, Rank::Ten);
    let b = card(Suit::Hearts, Rank::Jack);
    let c = card(Suit::Clubs, Rank::Ten);

    assert!(a.same_suit(&b));
    assert!(!a.same_rank(&b));
    assert!(a.same_rank(&c));
    assert!(!a.same_suit(&c));
}

#[test]
fn canonical_index_is_a_bijection() {
    let indices: HashSet<usize> = standard_cards().iter().map(Card::canonical_index).collect();
    assert_eq!(indices.len(), DECK_SIZE);
    assert!(indices.iter().all(|&i| i < DECK_SIZE));

    for (i, c) in standard_cards().iter().enumerate() {
        assert_eq!(c.canonical_index(), i);
        let back = Card::from_canonical_index(i).unwrap();
        assert!(back.same_suit(c) && back.same_rank(c));
    }
    assert_eq!(Card::from_canonical_index(DECK_SIZE), None);
}

#[test]
fn canonical_index_values() {
    assert_eq!(card(Suit::Hearts, Rank::Two).canonical_index(), 0);
    assert_eq!(card(Suit::Hearts, Rank::Ace).canonical_index(), 12);
    assert_eq!(card(Suit::Spades, Rank::Ace).canonical_index(), 51);
}

#[test]
fn max_rank_picks_highest() {
    let cards = [
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Nine),
    ];
    assert_eq!(Card::max_rank(&cards), Ok(Rank::King));
    assert_eq!(Card::max_rank(&debug_cards()), Ok(Rank::Ace));
    assert_eq!(
        Card::max_rank(&[card(Suit::Clubs, Rank::Two)]),
        Ok(Rank::Two)
    );
}

#[test]
fn max_rank_of_empty_input_fails() {
    assert_eq!(Card::max_rank(&[]), Err(RankError::EmptyInput));
}

#[test]
fn ordering_follows_rank() {
    assert!(card(Suit::Spades, Rank::Two) < card(Suit::Hearts, Rank::Three));
    assert!(card(Suit::Hearts, Rank::Ace) > card(Suit::Hearts, Rank::King));
    assert!(Rank::Ten < Rank::Jack);
}

#[test]
fn display_formats() {
    assert_eq!(card(Suit::Hearts, Rank::King).to_string(), "Kh");
    assert_eq!(card(Suit::Spades, Rank::Ten).to_string(), "Ts");
    assert_eq!(
        format_cards(&[card(Suit::Diamonds, Rank::Two), card(Suit::Clubs, Rank::Ace)]),
        "2d Ac"
    );
    assert_eq!(format_cards(&[]), "");
}
