//! Hand strength evaluation.
//!
//! The engine only ever asks one question at showdown: which contender has
//! the best combination? It asks through [`HandEvaluator`], whose scores are
//! a total order where lower wins. [`StandardEvaluator`] is the built-in
//! implementation; tests swap in fixed-score stubs.

use std::cmp::Ordering;
use std::fmt;

use crate::cards::{Card, Suit};

/// Ranks a player's hole cards against the board. Lower score wins; the
/// absolute value carries no meaning beyond the ordering.
pub trait HandEvaluator: fmt::Debug + Send {
    fn evaluate(&self, community: &[Card], hole: &[Card]) -> u32;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    // tiebreak ranks, high -> low, zero padded
    pub kickers: [u8; 5],
}

impl HandStrength {
    fn new(category: Category, ranks: &[u8]) -> Self {
        let mut kickers = [0u8; 5];
        for (slot, &r) in kickers.iter_mut().zip(ranks) {
            *slot = r;
        }
        Self { category, kickers }
    }

    /// Packs category and kickers into one integer, higher is stronger.
    /// Ranks fit in a nibble, so five kickers take 20 bits.
    fn packed(&self) -> u32 {
        self.kickers
            .iter()
            .fold(self.category as u32, |acc, &k| (acc << 4) | u32::from(k))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Score above every packed strength, so `WORST_SCORE - packed` stays positive.
const WORST_SCORE: u32 = (Category::StraightFlush as u32 + 1) << 20;

/// Best-five-of-seven evaluator over the board plus hole cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, community: &[Card], hole: &[Card]) -> u32 {
        let cards: Vec<Card> = community.iter().chain(hole).copied().collect();
        WORST_SCORE - evaluate_hand(&cards).packed()
    }
}

/// Classifies up to seven cards into their best five-card category.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15];
    let mut suit_masks = [0u16; 4];
    for c in cards {
        let r = c.rank as usize;
        rank_counts[r] += 1;
        suit_masks[suit_index(c.suit)] |= 1 << r;
    }

    let flush_mask = suit_masks.iter().copied().find(|m| m.count_ones() >= 5);

    if let Some(high) = flush_mask.and_then(straight_high) {
        return HandStrength::new(Category::StraightFlush, &[high]);
    }

    // ranks grouped by multiplicity, each list high -> low
    let by_count = |n: u8| -> Vec<u8> {
        (2..=14u8)
            .rev()
            .filter(|&r| rank_counts[r as usize] == n)
            .collect()
    };
    let quads = by_count(4);
    let trips = by_count(3);
    let pairs = by_count(2);
    let present: Vec<u8> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    let kickers_excluding = |skip: &[u8], take: usize| -> Vec<u8> {
        present
            .iter()
            .copied()
            .filter(|r| !skip.contains(r))
            .take(take)
            .collect()
    };

    if let Some(&q) = quads.first() {
        let mut ranks = vec![q];
        ranks.extend(kickers_excluding(&[q], 1));
        return HandStrength::new(Category::FourOfAKind, &ranks);
    }

    if let Some(&t) = trips.first() {
        // a second set of trips plays as the pair
        let pair = trips.get(1).copied().into_iter().chain(pairs.first().copied()).max();
        if let Some(p) = pair {
            return HandStrength::new(Category::FullHouse, &[t, p]);
        }
    }

    if let Some(mask) = flush_mask {
        let ranks: Vec<u8> = (2..=14u8)
            .rev()
            .filter(|&r| mask & (1 << r) != 0)
            .take(5)
            .collect();
        return HandStrength::new(Category::Flush, &ranks);
    }

    let all_mask = suit_masks.iter().fold(0u16, |acc, m| acc | m);
    if let Some(high) = straight_high(all_mask) {
        return HandStrength::new(Category::Straight, &[high]);
    }

    if let Some(&t) = trips.first() {
        let mut ranks = vec![t];
        ranks.extend(kickers_excluding(&[t], 2));
        return HandStrength::new(Category::ThreeOfAKind, &ranks);
    }

    if pairs.len() >= 2 {
        let (hi, lo) = (pairs[0], pairs[1]);
        let mut ranks = vec![hi, lo];
        ranks.extend(kickers_excluding(&[hi, lo], 1));
        return HandStrength::new(Category::TwoPair, &ranks);
    }

    if let Some(&p) = pairs.first() {
        let mut ranks = vec![p];
        ranks.extend(kickers_excluding(&[p], 3));
        return HandStrength::new(Category::OnePair, &ranks);
    }

    HandStrength::new(Category::HighCard, &kickers_excluding(&[], 5))
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Highest card of the best straight in a rank bitmask (bit r set for rank r).
/// The wheel (A-2-3-4-5) reports 5.
fn straight_high(mask: u16) -> Option<u8> {
    let mut m = mask;
    if m & (1 << 14) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        m & window == window
    })
}
