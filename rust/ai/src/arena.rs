//! Drives one tournament between decision sources.

use spingo_engine::engine::{Engine, Status};
use spingo_engine::errors::GameError;
use spingo_engine::player::Action;
use tracing::{debug, info, warn};

use crate::DecisionSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Tournament winner, or the biggest stack when the hand cap cut play
    /// short (lowest seat on a tie)
    pub winner: usize,
    /// Chips per seat, counting anything posted into the hand that was
    /// dealt but not yet played
    pub stacks: Vec<u32>,
    pub hands_played: u32,
    /// True when one player took every chip
    pub finished: bool,
}

/// Plays `engine`'s current tournament until it is over or `max_hands`
/// hands have completed. `agents[i]` decides for seat `i`.
///
/// An action the engine rejects is logged and replaced by a fold.
///
/// # Errors
///
/// [`GameError::InvalidSetup`] when the agent count does not match the
/// seat count; any non-action error from the engine is passed through.
pub fn play_match(
    engine: &mut Engine,
    agents: &mut [Box<dyn DecisionSource>],
    max_hands: u32,
) -> Result<MatchOutcome, GameError> {
    let seats = engine.players().len();
    if agents.len() != seats {
        return Err(GameError::InvalidSetup(format!(
            "{} decision sources for {} seats",
            agents.len(),
            seats
        )));
    }
    info!(seats, max_hands, "match started");

    while !engine.is_game_over() && engine.hands_played() < max_hands {
        let Some(seat) = engine.acting_seat() else {
            break;
        };
        let view = engine.view();
        let agent = &mut agents[seat];
        let action = agent.decide(&view);
        debug!(seat, agent = agent.name(), ?action, "decision");

        let status = match engine.step(action) {
            Ok((status, _)) => status,
            Err(GameError::IllegalAction(reason)) => {
                warn!(seat, agent = agent.name(), ?action, %reason, "illegal action, folding");
                engine.step(Action::Fold)?.0
            }
            Err(e) => return Err(e),
        };
        if status == Status::GameOver {
            break;
        }
    }

    let dealt = engine.hand().is_some();
    let stacks: Vec<u32> = engine
        .players()
        .iter()
        .map(|p| p.stack() + if dealt { p.committed() } else { 0 })
        .collect();
    let finished = engine.is_game_over();
    let winner = match engine.winner() {
        Some(w) => w,
        None => leader(&stacks),
    };
    info!(
        winner,
        agent = agents[winner].name(),
        hands = engine.hands_played(),
        finished,
        "match over"
    );
    Ok(MatchOutcome {
        winner,
        stacks,
        hands_played: engine.hands_played(),
        finished,
    })
}

fn leader(stacks: &[u32]) -> usize {
    stacks
        .iter()
        .enumerate()
        .fold(0, |best, (i, &s)| if s > stacks[best] { i } else { best })
}
