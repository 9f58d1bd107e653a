//! Rule-based decision source.
//!
//! Preflop it rates the two hole cards on a 0-10 scale; postflop it rates
//! the made hand's category. Calls are weighed against pot odds. The
//! strategy is deterministic so matches between baseline players replay
//! exactly under a seeded deck.

use spingo_engine::betting::Stage;
use spingo_engine::cards::Card;
use spingo_engine::hand::{evaluate_hand, Category};
use spingo_engine::player::Action;
use spingo_engine::view::StateView;

use crate::DecisionSource;

#[derive(Debug, Clone)]
pub struct BaselineAI {
    name: String,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self::named("BaselineAI")
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// 9-10 premium, 7-8 strong, 5-6 medium, 3-4 marginal, 0-2 weak.
    fn preflop_strength(a: Card, b: Card) -> u8 {
        let (r1, r2) = (a.rank as u8, b.rank as u8);
        let (high, low) = (r1.max(r2), r1.min(r2));
        let suited = a.suit == b.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    fn postflop_strength(hole: &[Card], board: &[Card]) -> u8 {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let strength = evaluate_hand(&cards);
        let base = match strength.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        let kicker = u8::from(strength.kickers[0] >= 12);
        (base + kicker).min(10)
    }

    /// Share of the final pot the caller would win back.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot as f32 + to_call as f32)
    }

    /// Raise to `min_raise_to` or `watermark + extra`, whichever is larger,
    /// or just call when the stack cannot cover the minimum.
    fn raise_or_call(view: &StateView, extra: u32) -> Action {
        let watermark = view.current_bet + view.to_call;
        let target = view
            .min_raise_to
            .max(watermark.saturating_add(extra))
            .min(view.max_raise_to());
        if target >= view.min_raise_to {
            Action::Raise(target)
        } else {
            Action::Call
        }
    }

    fn choose(strength: u8, view: &StateView) -> Action {
        if view.can_check() {
            return match strength {
                9..=10 => Self::raise_or_call(view, view.pot.saturating_mul(2) / 3),
                7..=8 => Self::raise_or_call(view, view.pot / 2),
                _ => Action::Call,
            };
        }

        if view.to_call >= view.stack {
            return if strength >= 7 {
                Action::Call
            } else {
                Action::Fold
            };
        }

        let odds = Self::pot_odds(view.pot, view.to_call);
        match strength {
            9..=10 => Self::raise_or_call(view, view.pot / 2),
            7..=8 => Action::Call,
            5..=6 if odds >= 0.3 || view.to_call <= view.pot / 4 => Action::Call,
            3..=4 if odds >= 0.4 || view.to_call <= view.pot / 6 => Action::Call,
            _ => Action::Fold,
        }
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionSource for BaselineAI {
    fn decide(&mut self, view: &StateView) -> Action {
        let [a, b] = view.hole[..] else {
            return if view.can_check() {
                Action::Call
            } else {
                Action::Fold
            };
        };
        let strength = if view.stage == Stage::Preflop || view.community.len() < 3 {
            Self::preflop_strength(a, b)
        } else {
            Self::postflop_strength(&view.hole, &view.community)
        };
        Self::choose(strength, view)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
