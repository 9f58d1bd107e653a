use std::collections::HashSet;

use spingo_engine::betting::Stage;
use spingo_engine::cards::Card;
use spingo_engine::deck::Deck;
use spingo_engine::engine::{Engine, Status};
use spingo_engine::errors::{GameError, IllegalAction};
use spingo_engine::hand::StandardEvaluator;
use spingo_engine::player::Action;

fn engine(players: usize, stack: u32, small_blind: u32) -> Engine {
    let mut e = Engine::with_parts(Deck::new_with_seed(42), Box::new(StandardEvaluator));
    e.reset_tournament(players, stack, small_blind).expect("valid setup");
    e
}

fn chips_on_table(e: &Engine) -> u64 {
    e.tournament().total_chips() + u64::from(e.pot())
}

#[test]
fn first_hand_posts_blinds_and_starts_after_big_blind() {
    let e = engine(3, 500, 10);
    let view = e.view();
    assert_eq!(view.stage, Stage::Preflop);
    assert_eq!(view.pot, 30);
    assert_eq!(view.seat, 0);
    assert_eq!(view.to_call, 20);
    assert_eq!(view.min_raise_to, 40);
    assert!(view.community.is_empty());
    assert_eq!(view.hole.len(), 2);
    assert_eq!(e.players()[1].current_bet(), 10);
    assert_eq!(e.players()[2].current_bet(), 20);
    assert_eq!(e.hand().unwrap().watermark(), 20);
}

#[test]
fn raise_fold_line_awards_pot_to_raiser() {
    let mut e = engine(3, 500, 10);

    let (status, view) = e.step(Action::Raise(60)).unwrap();
    assert_eq!(status, Status::Playing);
    assert_eq!(view.seat, 1);
    assert_eq!(view.to_call, 50);
    assert_eq!(e.hand().unwrap().last_aggressor(), Some(0));

    let (status, view) = e.step(Action::Fold).unwrap();
    assert_eq!(status, Status::Playing);
    assert_eq!(view.seat, 2);
    assert_eq!(view.to_call, 40);

    let (status, view) = e.step(Action::Fold).unwrap();
    assert_eq!(status, Status::HandOver);
    assert_eq!(view.hand_number, 2);

    let record = e.last_hand().unwrap();
    assert_eq!(record.pot, 90);
    assert_eq!(record.winner, Some(0));
    assert!(record.board.is_empty());
    assert!(record.showdown.is_none());

    // the next hand has already posted blinds; add them back for the result
    let totals: Vec<u32> = e
        .players()
        .iter()
        .map(|p| p.stack() + p.committed())
        .collect();
    assert_eq!(totals, vec![530, 490, 480]);
    assert_eq!(e.tournament().dealer(), 1);
}

#[test]
fn fold_to_one_mid_street_ends_hand_without_more_cards() {
    let mut e = engine(3, 500, 10);
    e.step(Action::Call).unwrap();
    e.step(Action::Call).unwrap();
    let (_, view) = e.step(Action::Call).unwrap();
    assert_eq!(view.stage, Stage::Flop);
    assert_eq!(view.community.len(), 3);
    assert_eq!(view.seat, 1, "first seat after the dealer opens the flop");

    e.step(Action::Raise(20)).unwrap();
    e.step(Action::Fold).unwrap();
    let (status, _) = e.step(Action::Fold).unwrap();
    assert_eq!(status, Status::HandOver);

    let record = e.last_hand().unwrap();
    assert_eq!(record.board.len(), 3);
    assert_eq!(record.winner, Some(1));
    assert_eq!(record.pot, 80);
}

#[test]
fn big_blind_gets_option_when_limped_to() {
    let mut e = engine(3, 500, 10);
    e.step(Action::Call).unwrap();
    let (_, view) = e.step(Action::Call).unwrap();
    assert_eq!(view.stage, Stage::Preflop);
    assert_eq!(view.seat, 2);
    assert!(view.can_check());

    let (_, view) = e.step(Action::Raise(40)).unwrap();
    assert_eq!(view.stage, Stage::Preflop);
    assert_eq!(view.seat, 0);
    assert_eq!(view.to_call, 20);
}

#[test]
fn postflop_action_skips_folded_seats_after_dealer() {
    let mut e = engine(3, 500, 10);
    e.step(Action::Call).unwrap();
    e.step(Action::Fold).unwrap();
    let (_, view) = e.step(Action::Call).unwrap();
    assert_eq!(view.stage, Stage::Flop);
    assert_eq!(view.seat, 2);
    let (_, view) = e.step(Action::Call).unwrap();
    assert_eq!(view.seat, 0);
}

#[test]
fn full_hand_draws_at_most_eleven_distinct_cards() {
    let mut e = engine(3, 500, 10);
    let mut status = Status::Playing;
    let mut steps = 0;
    while status == Status::Playing {
        status = e.step(Action::Call).unwrap().0;
        steps += 1;
    }
    assert_eq!(status, Status::HandOver);
    assert_eq!(steps, 12);

    let record = e.last_hand().unwrap();
    let showdown = record.showdown.as_ref().expect("went to showdown");
    assert_eq!(record.board.len(), 5);
    assert_eq!(showdown.contenders.len(), 3);

    let mut seen: HashSet<Card> = record.board.iter().copied().collect();
    for c in &showdown.contenders {
        assert_eq!(c.hole.len(), 2);
        seen.extend(c.hole.iter().copied());
    }
    assert_eq!(seen.len(), 11);
}

#[test]
fn chips_are_conserved_through_many_hands() {
    let mut e = engine(3, 500, 10);
    let start = chips_on_table(&e);
    for i in 0..2_000 {
        let view = e.view();
        let action = match i % 7 {
            0 | 3 => Action::Raise(view.min_raise_to),
            5 => Action::Fold,
            _ => Action::Call,
        };
        let (status, _) = e.step(action).expect("generated actions are legal");
        assert_eq!(chips_on_table(&e), start);
        if status == Status::GameOver {
            break;
        }
    }
}

#[test]
fn out_of_turn_action_is_rejected_and_changes_nothing() {
    let mut e = engine(3, 500, 10);
    let before: Vec<_> = e.players().to_vec();
    let err = e.act(2, Action::Call).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction(IllegalAction::NotPlayersTurn {
            expected: 0,
            actual: 2
        })
    );
    assert_eq!(e.players(), before.as_slice());
    assert_eq!(e.pot(), 30);
    assert_eq!(e.acting_seat(), Some(0));
    assert!(e.act(0, Action::Call).is_ok());
}

#[test]
fn sub_minimum_raise_is_rejected_and_changes_nothing() {
    let mut e = engine(3, 500, 10);
    let err = e.step(Action::Raise(30)).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction(IllegalAction::RaiseBelowMinimum {
            amount: 30,
            minimum: 40
        })
    );
    assert_eq!(e.pot(), 30);
    assert_eq!(e.players()[0].stack(), 500);
    assert_eq!(e.acting_seat(), Some(0));
    assert!(e.hand().unwrap().last_aggressor().is_none());
}

#[test]
fn over_asking_clamps_to_stack_and_sets_all_in() {
    let mut e = engine(2, 100, 10);
    // heads-up: seat 1 posts the small blind and acts first
    assert_eq!(e.acting_seat(), Some(1));
    let (status, view) = e.step(Action::Raise(10_000)).unwrap();
    assert_eq!(status, Status::Playing);
    let shover = &e.players()[1];
    assert_eq!(shover.stack(), 0);
    assert_eq!(shover.current_bet(), 100);
    assert!(shover.is_all_in());
    assert_eq!(view.seat, 0);
    assert_eq!(view.to_call, 80);
    assert_eq!(e.pot(), 120);
}

#[test]
fn all_in_call_runs_out_the_board() {
    let mut e = engine(2, 100, 10);
    e.step(Action::Raise(10_000)).unwrap();
    let (status, view) = e.step(Action::Call).unwrap();
    assert_eq!(status, Status::GameOver);

    let record = e.last_hand().unwrap();
    assert_eq!(record.board.len(), 5);
    assert_eq!(record.pot, 200);
    assert!(record.showdown.is_some());
    assert_eq!(view.stage, Stage::Showdown);
    assert_eq!(view.stack, 200);
    assert_eq!(e.pot(), 0);
    assert_eq!(e.winner(), record.winner);
}

#[test]
fn stepping_without_a_tournament_is_rejected() {
    let mut e = Engine::with_parts(Deck::new_with_seed(1), Box::new(StandardEvaluator));
    assert_eq!(
        e.step(Action::Call).unwrap_err(),
        GameError::IllegalAction(IllegalAction::NoHandInProgress)
    );
}

#[test]
fn reset_hand_mid_hand_refunds_contributions() {
    let mut e = engine(3, 500, 10);
    e.step(Action::Raise(60)).unwrap();
    let view = e.reset_hand().unwrap();
    assert_eq!(e.hands_played(), 0);
    assert_eq!(view.pot, 30);
    assert_eq!(chips_on_table(&e), 1_500);
    assert_eq!(e.players()[0].stack(), 500);
}

#[test]
fn raised_blinds_apply_from_next_hand() {
    let mut e = engine(3, 500, 10);
    e.set_small_blind(25).unwrap();
    assert_eq!(e.pot(), 30, "current hand keeps its blinds");
    e.step(Action::Raise(60)).unwrap();
    e.step(Action::Fold).unwrap();
    let (_, view) = e.step(Action::Fold).unwrap();
    assert_eq!(view.pot, 75);
    assert_eq!(e.tournament().blind_level(), 2);
    assert_eq!(e.tournament().big_blind(), 50);
    assert!(matches!(
        e.set_small_blind(0),
        Err(GameError::InvalidSetup(_))
    ));
}

#[test]
fn invalid_setups_are_rejected() {
    let mut e = Engine::with_parts(Deck::new_with_seed(1), Box::new(StandardEvaluator));
    assert!(matches!(e.reset_tournament(1, 500, 10), Err(GameError::InvalidSetup(_))));
    assert!(matches!(e.reset_tournament(10, 500, 10), Err(GameError::InvalidSetup(_))));
    assert!(matches!(e.reset_tournament(3, 0, 10), Err(GameError::InvalidSetup(_))));
    assert!(matches!(e.reset_tournament(3, 500, 0), Err(GameError::InvalidSetup(_))));
    // every chip on the table must fit the ledger
    assert!(matches!(
        e.reset_tournament(2, u32::MAX, 1),
        Err(GameError::InvalidSetup(_))
    ));
    assert!(matches!(
        e.reset_tournament(3, u32::MAX / 2, 10),
        Err(GameError::InvalidSetup(_))
    ));
}

#[test]
fn largest_ledger_table_plays_an_all_in_without_overflow() {
    let mut e = engine(2, u32::MAX / 2, 1);
    let start = chips_on_table(&e);
    e.step(Action::Raise(u32::MAX)).unwrap();
    let (status, view) = e.step(Action::Call).unwrap();
    assert_eq!(status, Status::GameOver);
    assert_eq!(chips_on_table(&e), start);
    assert_eq!(u64::from(view.stack), start);
}

#[test]
fn view_shows_only_the_acting_seats_cards() {
    let e = engine(3, 500, 10);
    let view = e.view();
    assert_eq!(view.hole.as_slice(), e.players()[view.seat].hole_cards());
    let text = view.to_string();
    assert!(text.contains("Stage: PREFLOP"));
    assert!(text.contains("Pot: 30"));
    assert!(text.contains("To Call: 20"));
    assert!(text.contains("Your Stack: 500"));
}
