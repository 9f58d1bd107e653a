use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use spingo_engine::player::Action;
use spingo_engine::view::StateView;

use crate::DecisionSource;

/// Picks fold, call or raise with equal odds.
#[derive(Debug)]
pub struct RandomAgent {
    name: String,
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    /// Reproducible variant for tests and replays.
    pub fn with_seed(name: &str, seed: u64) -> Self {
        Self {
            name: name.to_string(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl DecisionSource for RandomAgent {
    fn decide(&mut self, view: &StateView) -> Action {
        match self.rng.random_range(0..3) {
            0 => Action::Fold,
            1 => Action::Call,
            _ => {
                let target = self.rng.random_range(20..=100u32);
                Action::Raise(target.max(view.min_raise_to))
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
