use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Phase of a hand. The four betting streets followed by showdown.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
        }
    }

    /// Community cards dealt when this stage begins.
    pub fn cards_on_entry(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::Preflop | Stage::Showdown => 0,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Preflop => "PREFLOP",
            Stage::Flop => "FLOP",
            Stage::Turn => "TURN",
            Stage::River => "RIVER",
            Stage::Showdown => "SHOWDOWN",
        };
        f.write_str(s)
    }
}

/// Turn order and closing logic for a single street.
///
/// Seats are addressed by their fixed index in the tournament seat list.
/// `acted` is cleared for everyone but the raiser whenever the watermark
/// rises, so action must come back around before the street can close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingRound {
    /// Highest street contribution so far
    watermark: u32,
    acting: Option<usize>,
    last_aggressor: Option<usize>,
    acted: Vec<bool>,
}

impl BettingRound {
    pub fn new(seats: usize, watermark: u32) -> Self {
        Self {
            watermark,
            acting: None,
            last_aggressor: None,
            acted: vec![false; seats],
        }
    }

    pub fn watermark(&self) -> u32 {
        self.watermark
    }
    pub fn acting(&self) -> Option<usize> {
        self.acting
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }

    pub fn set_acting(&mut self, seat: Option<usize>) {
        self.acting = seat;
    }

    /// Registers that `seat` has acted, with its contribution already applied
    /// to `players`. A contribution above the watermark reopens the action.
    pub fn record(&mut self, seat: usize, players: &[Player]) {
        let bet = players[seat].current_bet();
        if bet > self.watermark {
            self.watermark = bet;
            self.last_aggressor = Some(seat);
            self.acted.fill(false);
        }
        self.acted[seat] = true;
    }

    pub fn needs_action(&self, seat: usize, player: &Player) -> bool {
        player.can_act() && (!self.acted[seat] || player.current_bet() < self.watermark)
    }

    /// True once no seat owes a decision on this street.
    ///
    /// A lone seat that can still act and already matches the watermark has
    /// nobody left to respond to it, so the street closes without it.
    pub fn is_complete(&self, players: &[Player]) -> bool {
        let mut live = players.iter().filter(|p| p.can_act());
        match (live.next(), live.next()) {
            (None, _) => true,
            (Some(only), None) => only.current_bet() >= self.watermark,
            _ => players
                .iter()
                .enumerate()
                .all(|(seat, p)| !self.needs_action(seat, p)),
        }
    }

    /// Next seat after `from` that still owes a decision.
    pub fn first_to_act_after(&self, players: &[Player], from: usize) -> Option<usize> {
        let n = players.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&s| self.needs_action(s, &players[s]))
    }
}
