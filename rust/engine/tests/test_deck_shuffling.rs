use std::collections::HashSet;

use spingo_engine::cards::{full_deck, Card};
use spingo_engine::deck::{Deck, SeededShuffler, Shuffler};
use spingo_engine::errors::GameError;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::secure();
    deck.shuffle();
    let cards = deck.draw(52).expect("full deck");
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.draw(10).unwrap(), d2.draw(10).unwrap());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.draw(10).unwrap(),
        d2.draw(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn secure_shuffle_does_not_keep_factory_order() {
    let mut deck = Deck::secure();
    deck.shuffle();
    let drawn = deck.draw(52).unwrap();
    let mut ordered = full_deck();
    ordered.reverse();
    assert_ne!(drawn, ordered);
}

#[test]
fn draw_beyond_remaining_is_deck_exhausted() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    deck.draw(50).unwrap();
    let err = deck.draw(3).unwrap_err();
    assert_eq!(
        err,
        GameError::DeckExhausted {
            requested: 3,
            remaining: 2
        }
    );
    // a failed draw removes nothing
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn reshuffle_rebuilds_full_deck() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    deck.draw(11).unwrap();
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
}

#[derive(Debug)]
struct ReverseShuffler;

impl Shuffler for ReverseShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.reverse();
    }
}

#[test]
fn injected_strategy_controls_order() {
    let mut deck = Deck::new(Box::new(ReverseShuffler));
    deck.shuffle();
    // reversed deck: the top card is the first card of the factory order
    assert_eq!(deck.draw(1).unwrap(), vec![full_deck()[0]]);
}

#[test]
fn seeded_shuffler_reports_seed() {
    assert_eq!(SeededShuffler::new(77).seed(), 77);
}
