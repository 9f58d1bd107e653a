use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Strategy used to order a freshly built deck.
///
/// The deck receives its shuffler at construction time, so callers choose
/// between OS-seeded and reproducible ordering without touching deck code.
pub trait Shuffler: fmt::Debug + Send {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// ChaCha20 keyed from operating-system entropy. Default for real play.
#[derive(Debug)]
pub struct SecureShuffler {
    rng: ChaCha20Rng,
}

impl SecureShuffler {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
        }
    }
}

impl Default for SecureShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for SecureShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// ChaCha20 keyed from a fixed seed, for replays and tests.
#[derive(Debug)]
pub struct SeededShuffler {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    shuffler: Box<dyn Shuffler>,
}

impl Deck {
    /// Builds an ordered 52-card deck. Nothing is shuffled until [`Deck::shuffle`].
    pub fn new(shuffler: Box<dyn Shuffler>) -> Self {
        Self {
            cards: full_deck(),
            shuffler,
        }
    }

    pub fn secure() -> Self {
        Self::new(Box::new(SecureShuffler::new()))
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(Box::new(SeededShuffler::new(seed)))
    }

    /// Rebuilds all 52 cards and shuffles them with the injected strategy.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.shuffler.shuffle(&mut self.cards);
    }

    /// Removes `n` cards from the top of the deck.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let at = self.cards.len() - n;
        let mut drawn = self.cards.split_off(at);
        drawn.reverse();
        Ok(drawn)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
