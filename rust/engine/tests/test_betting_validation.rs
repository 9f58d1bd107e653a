use spingo_engine::errors::{GameError, IllegalAction};
use spingo_engine::player::{Action as A, Player};
use spingo_engine::rules::{min_raise_to, validate_action, ValidatedAction};

#[test]
fn raise_must_double_the_watermark() {
    let p = Player::new(0, 1_000);
    let err = validate_action(&p, 100, 20, A::Raise(150)).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction(IllegalAction::RaiseBelowMinimum {
            amount: 150,
            minimum: 200
        })
    );
    assert_eq!(
        validate_action(&p, 100, 20, A::Raise(200)).unwrap(),
        ValidatedAction::Raise { to: 200 }
    );
}

#[test]
fn unopened_street_minimum_is_big_blind() {
    assert_eq!(min_raise_to(0, 20), 20);
    let p = Player::new(0, 1_000);
    assert!(validate_action(&p, 0, 20, A::Raise(10)).is_err());
    assert_eq!(
        validate_action(&p, 0, 20, A::Raise(20)).unwrap(),
        ValidatedAction::Raise { to: 20 }
    );
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    let p = Player::new(0, 60);
    let va = validate_action(&p, 100, 20, A::Call).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(60));
}

#[test]
fn call_with_nothing_owed_is_check() {
    let mut p = Player::new(0, 500);
    p.post(20);
    assert_eq!(validate_action(&p, 20, 20, A::Call).unwrap(), ValidatedAction::Check);
}

#[test]
fn call_owes_only_the_difference() {
    let mut p = Player::new(0, 500);
    p.post(10);
    assert_eq!(
        validate_action(&p, 60, 20, A::Call).unwrap(),
        ValidatedAction::Call(50)
    );
}

#[test]
fn short_stack_raise_becomes_allin_without_error() {
    // cannot reach the 200 minimum, but a shove is always allowed
    let p = Player::new(0, 130);
    let va = validate_action(&p, 100, 20, A::Raise(150)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(130));
}

#[test]
fn oversized_raise_caps_at_stack() {
    let mut p = Player::new(0, 300);
    p.post(20);
    let va = validate_action(&p, 20, 20, A::Raise(10_000)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(280));
}

#[test]
fn folded_or_all_in_players_cannot_act() {
    let mut folded = Player::new(0, 500);
    folded.fold();
    assert_eq!(
        validate_action(&folded, 20, 20, A::Call).unwrap_err(),
        GameError::IllegalAction(IllegalAction::PlayerFolded)
    );

    let mut shoved = Player::new(1, 50);
    shoved.post(50);
    assert_eq!(
        validate_action(&shoved, 50, 20, A::Fold).unwrap_err(),
        GameError::IllegalAction(IllegalAction::PlayerAllIn)
    );
}
