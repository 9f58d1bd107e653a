use std::fmt;

use serde::Serialize;

use crate::betting::Stage;
use crate::cards::Card;

/// What a decision source is allowed to see when it is asked to act.
///
/// Only the acting seat's own hole cards are included. Once the tournament
/// is over the view describes the final table from the winner's seat, with
/// no hole cards and nothing to call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateView {
    pub hand_number: u32,
    pub stage: Stage,
    pub pot: u32,
    /// Seat the view belongs to
    pub seat: usize,
    pub stack: u32,
    /// Chips this seat already put in on the current street
    pub current_bet: u32,
    pub to_call: u32,
    /// Smallest total a `Raise` may target right now
    pub min_raise_to: u32,
    pub community: Vec<Card>,
    pub hole: Vec<Card>,
}

impl StateView {
    pub fn can_check(&self) -> bool {
        self.to_call == 0
    }

    /// Every chip the seat could still commit this street, as a raise target.
    pub fn max_raise_to(&self) -> u32 {
        self.current_bet + self.stack
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str("[")?;
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("]")
}

/// Plain-text block suitable for prompting text-driven decision sources.
impl fmt::Display for StateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stage: {}", self.stage)?;
        writeln!(f, "Pot: {}", self.pot)?;
        writeln!(f, "Your Stack: {}", self.stack)?;
        writeln!(f, "To Call: {}", self.to_call)?;
        write!(f, "Community Cards: ")?;
        write_cards(f, &self.community)?;
        writeln!(f)?;
        write!(f, "Your Hand: ")?;
        write_cards(f, &self.hole)?;
        writeln!(f)
    }
}
