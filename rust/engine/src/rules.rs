use crate::errors::{GameError, IllegalAction};
use crate::player::{Action, Player};

/// An action after legality checks and chip capping, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips added to match the watermark
    Call(u32),
    /// New total street contribution
    Raise { to: u32 },
    /// Chips added when the request meets or exceeds the remaining stack
    AllIn(u32),
}

/// Smallest legal raise target on a street.
///
/// Simplified no-limit rule: the new total must be at least double the
/// watermark, and never less than one big blind when the street is unopened.
/// The true rule (previous raise increment) is not modelled.
pub fn min_raise_to(watermark: u32, big_blind: u32) -> u32 {
    watermark.saturating_mul(2).max(big_blind)
}

/// Checks an action for `player` against the street's watermark.
///
/// Requests for more chips than the stack holds are never errors; they are
/// capped and become [`ValidatedAction::AllIn`].
///
/// # Errors
///
/// - [`IllegalAction::PlayerFolded`] / [`IllegalAction::PlayerAllIn`] when the seat cannot act
/// - [`IllegalAction::RaiseBelowMinimum`] when a raise target is short of
///   [`min_raise_to`] and does not commit the whole stack
///
/// # Examples
///
/// ```
/// use spingo_engine::player::{Action, Player};
/// use spingo_engine::rules::{validate_action, ValidatedAction};
///
/// let p = Player::new(0, 500);
/// assert_eq!(validate_action(&p, 20, 20, Action::Call), Ok(ValidatedAction::Call(20)));
/// assert_eq!(validate_action(&p, 20, 20, Action::Raise(60)), Ok(ValidatedAction::Raise { to: 60 }));
/// assert_eq!(validate_action(&p, 20, 20, Action::Raise(9_999)), Ok(ValidatedAction::AllIn(500)));
/// assert!(validate_action(&p, 20, 20, Action::Raise(30)).is_err());
/// ```
pub fn validate_action(
    player: &Player,
    watermark: u32,
    big_blind: u32,
    action: Action,
) -> Result<ValidatedAction, GameError> {
    if !player.in_hand() {
        return Err(IllegalAction::PlayerFolded.into());
    }
    if player.is_all_in() {
        return Err(IllegalAction::PlayerAllIn.into());
    }
    let stack = player.stack();
    match action {
        Action::Fold => Ok(ValidatedAction::Fold),
        Action::Call => {
            let to_call = watermark.saturating_sub(player.current_bet());
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        Action::Raise(target) => {
            let ceiling = player.current_bet() + stack;
            let minimum = min_raise_to(watermark, big_blind);
            if target >= ceiling {
                Ok(ValidatedAction::AllIn(stack))
            } else if target < minimum {
                Err(IllegalAction::RaiseBelowMinimum {
                    amount: target,
                    minimum,
                }
                .into())
            } else {
                Ok(ValidatedAction::Raise { to: target })
            }
        }
    }
}
