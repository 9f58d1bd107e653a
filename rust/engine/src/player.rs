use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// A decision handed to the engine for the acting seat.
///
/// `Raise` carries the target total contribution for the current street,
/// not the increment over the previous bet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand
    Fold,
    /// Match the watermark (a check when nothing is owed)
    Call,
    /// Raise this street's contribution to the given total
    Raise(u32),
}

/// Default starting stack for each seat
pub const STARTING_STACK: u32 = 500;

/// One seat's chip ledger and per-hand flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: usize,
    stack: u32,
    hole: Vec<Card>,
    /// Contribution on the current street
    current_bet: u32,
    /// Contribution over the whole hand
    committed: u32,
    folded: bool,
    all_in: bool,
    /// Still has chips in the tournament and was dealt into this hand
    active: bool,
}

impl Player {
    pub fn new(id: usize, stack: u32) -> Self {
        Self {
            id,
            stack,
            hole: Vec::with_capacity(2),
            current_bet: 0,
            committed: 0,
            folded: false,
            all_in: false,
            active: stack > 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Dealt in and not folded: still contesting the pot.
    pub fn in_hand(&self) -> bool {
        self.active && !self.folded
    }

    /// Still contesting the pot and able to put in more chips.
    pub fn can_act(&self) -> bool {
        self.in_hand() && !self.all_in
    }

    /// Clears per-hand state. Busted seats become permanently inactive.
    pub fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.current_bet = 0;
        self.committed = 0;
        self.folded = false;
        self.all_in = false;
        self.active = self.stack > 0;
    }

    pub fn reset_for_street(&mut self) {
        self.current_bet = 0;
    }

    pub fn give_cards(&mut self, cards: Vec<Card>) {
        self.hole = cards;
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    /// Moves up to `amount` chips from the stack into this street's
    /// contribution. Returns the chips actually moved; an emptied stack marks
    /// the seat all-in.
    pub fn post(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.current_bet += moved;
        self.committed += moved;
        if self.stack == 0 && self.active {
            self.all_in = true;
        }
        moved
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Marks a busted seat as out of the tournament.
    pub fn eliminate(&mut self) {
        self.active = false;
        self.hole.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_clamps_to_stack_and_sets_all_in() {
        let mut p = Player::new(0, 15);
        assert_eq!(p.post(20), 15);
        assert_eq!(p.stack(), 0);
        assert_eq!(p.current_bet(), 15);
        assert!(p.is_all_in());
        assert!(!p.can_act());
        assert!(p.in_hand());
    }

    #[test]
    fn street_reset_keeps_hand_commitment() {
        let mut p = Player::new(1, 100);
        p.post(30);
        p.reset_for_street();
        assert_eq!(p.current_bet(), 0);
        assert_eq!(p.committed(), 30);
    }

    #[test]
    fn busted_player_stays_inactive() {
        let mut p = Player::new(2, 10);
        p.post(10);
        p.reset_for_hand();
        assert!(!p.is_active());
        assert!(!p.is_all_in());
    }
}
