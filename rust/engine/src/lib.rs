//! # spingo-engine: Spin & Go Hold'em Tournament Engine
//!
//! A no-limit Texas Hold'em engine for short-handed (2-3 seat) freezeout
//! tournaments. It deals hands, posts blinds, runs betting streets, settles
//! the pot at showdown, retires busted players and rotates the button until
//! one player holds every chip.
//!
//! The engine never decides anything itself. A driver feeds it one
//! [`player::Action`] at a time and reads back a [`view::StateView`] for the
//! next seat to act.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - Deck with an injected shuffle strategy (OS-seeded ChaCha20 by default)
//! - [`hand`] - Hand evaluator interface and standard evaluator
//! - [`player`] - Player ledger and the action type
//! - [`rules`] - Action validation and the minimum-raise rule
//! - [`betting`] - Street state machine: turn order and street completion
//! - [`game`] - Seats, button and blinds
//! - [`engine`] - Hand lifecycle and tournament control
//! - [`view`] - What a decision source sees
//! - [`logger`] - Hand history records and JSONL writer
//! - [`config`] - Layered tournament configuration
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use spingo_engine::engine::{Engine, Status};
//! use spingo_engine::player::Action;
//!
//! let mut engine = Engine::new(3, 500, 10).expect("valid setup");
//! loop {
//!     let view = engine.view();
//!     let action = if view.can_check() { Action::Call } else { Action::Fold };
//!     match engine.step(action) {
//!         Ok((Status::GameOver, _)) => break,
//!         Ok(_) => {}
//!         Err(e) => panic!("unexpected rejection: {e}"),
//!     }
//!     if engine.hands_played() >= 5 {
//!         break;
//!     }
//! }
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod view;
