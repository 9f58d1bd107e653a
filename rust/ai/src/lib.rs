//! # spingo-ai: Decision Sources for the Spin & Go Engine
//!
//! Automated players that turn a [`StateView`] into an [`Action`], plus an
//! arena that drives a whole tournament with them.
//!
//! ## Core Components
//!
//! - [`DecisionSource`] - Interface every automated player implements
//! - [`baseline`] - Rule-based player using hand strength and pot odds
//! - [`random`] - Uniformly random player
//! - [`arena`] - Runs one tournament between decision sources
//! - [`create_ai`] - Factory by kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use spingo_ai::{arena, create_ai};
//! use spingo_engine::engine::Engine;
//!
//! let mut engine = Engine::new(3, 500, 10).expect("valid setup");
//! let mut agents = vec![
//!     create_ai("baseline", "alice").unwrap(),
//!     create_ai("baseline", "bob").unwrap(),
//!     create_ai("random", "carol").unwrap(),
//! ];
//! let outcome = arena::play_match(&mut engine, &mut agents, 30).expect("match runs");
//! assert_eq!(outcome.stacks.iter().map(|&s| u64::from(s)).sum::<u64>(), 1_500);
//! ```

use spingo_engine::player::Action;
use spingo_engine::view::StateView;
use thiserror::Error;

pub mod arena;
pub mod baseline;
pub mod random;

/// Anything that can choose an action for the seat a view belongs to.
///
/// Implementations may return an illegal action; the engine rejects it and
/// the caller decides what to do next.
pub trait DecisionSource: Send {
    fn decide(&mut self, view: &StateView) -> Action;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown decision source kind: {0}")]
pub struct UnknownAi(pub String);

/// Builds a decision source by kind: `"baseline"` or `"random"`.
///
/// ```rust
/// use spingo_ai::create_ai;
///
/// let ai = create_ai("baseline", "hero").unwrap();
/// assert_eq!(ai.name(), "hero");
/// assert!(create_ai("oracle", "x").is_err());
/// ```
pub fn create_ai(kind: &str, name: &str) -> Result<Box<dyn DecisionSource>, UnknownAi> {
    match kind {
        "baseline" => Ok(Box::new(baseline::BaselineAI::named(name))),
        "random" => Ok(Box::new(random::RandomAgent::new(name))),
        other => Err(UnknownAi(other.to_string())),
    }
}
