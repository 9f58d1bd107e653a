use tracing::{debug, info, warn};

use crate::betting::{BettingRound, Stage};
use crate::cards::Card;
use crate::config::TournamentConfig;
use crate::deck::Deck;
use crate::errors::{GameError, IllegalAction};
use crate::game::{TournamentState, MAX_PLAYERS, MIN_PLAYERS};
use crate::hand::{HandEvaluator, StandardEvaluator};
use crate::logger::{ActionRecord, HandRecord, SeatScore, ShowdownInfo};
use crate::player::{Action, Player};
use crate::rules::{min_raise_to, validate_action, ValidatedAction};
use crate::view::StateView;

/// Outcome of a [`Engine::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The hand continues; the view belongs to the next seat to act
    Playing,
    /// The hand ended; the view is the first decision of the next hand
    HandOver,
    /// At most one player has chips left
    GameOver,
}

/// Per-hand state, discarded once the pot is awarded.
#[derive(Debug, Clone)]
pub struct HandState {
    number: u32,
    stage: Stage,
    community: Vec<Card>,
    pot: u32,
    /// Big blind in force when the hand was dealt
    big_blind: u32,
    round: BettingRound,
    record: HandRecord,
}

impl HandState {
    pub fn number(&self) -> u32 {
        self.number
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn small_blind_seat(&self) -> usize {
        self.record.small_blind_seat
    }
    pub fn big_blind_seat(&self) -> usize {
        self.record.big_blind_seat
    }
    pub fn watermark(&self) -> u32 {
        self.round.watermark()
    }
    pub fn acting(&self) -> Option<usize> {
        self.round.acting()
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.round.last_aggressor()
    }
}

enum Progress {
    AwaitingAction,
    HandEnded,
}

/// Tournament engine: deals hands, runs betting streets, settles pots and
/// rotates the button until a single player holds every chip.
///
/// Driving loop: read the [`StateView`], pick an [`Action`], call
/// [`Engine::step`]. A rejected action leaves the engine untouched.
///
/// # Examples
///
/// ```
/// use spingo_engine::deck::Deck;
/// use spingo_engine::engine::{Engine, Status};
/// use spingo_engine::hand::StandardEvaluator;
/// use spingo_engine::player::Action;
///
/// let mut engine = Engine::with_parts(Deck::new_with_seed(7), Box::new(StandardEvaluator));
/// let view = engine.reset_tournament(3, 500, 10).expect("tournament starts");
/// assert_eq!(view.pot, 30);
///
/// let (status, _) = engine.step(Action::Raise(60)).unwrap();
/// assert_eq!(status, Status::Playing);
/// engine.step(Action::Fold).unwrap();
/// let (status, _) = engine.step(Action::Fold).unwrap();
/// assert_eq!(status, Status::HandOver);
/// assert_eq!(engine.last_hand().unwrap().pot, 90);
///
/// // the next hand is already dealt and seat 0 now posts the big blind
/// let raiser = &engine.players()[0];
/// assert_eq!(raiser.stack() + raiser.committed(), 530);
/// ```
#[derive(Debug)]
pub struct Engine {
    state: TournamentState,
    deck: Deck,
    evaluator: Box<dyn HandEvaluator>,
    hand: Option<HandState>,
    last_hand: Option<HandRecord>,
    hands_played: u32,
    winner: Option<usize>,
}

impl Engine {
    /// Secure shuffling, standard evaluator, first hand dealt.
    pub fn new(num_players: usize, starting_stack: u32, small_blind: u32) -> Result<Self, GameError> {
        let mut engine = Self::with_parts(Deck::secure(), Box::new(StandardEvaluator));
        engine.reset_tournament(num_players, starting_stack, small_blind)?;
        Ok(engine)
    }

    /// Engine with injected deck (and thus shuffle strategy) and evaluator.
    /// No tournament is running until [`Engine::reset_tournament`].
    pub fn with_parts(deck: Deck, evaluator: Box<dyn HandEvaluator>) -> Self {
        Self {
            state: TournamentState::new(0, 0, 0),
            deck,
            evaluator,
            hand: None,
            last_hand: None,
            hands_played: 0,
            winner: None,
        }
    }

    pub fn from_config(cfg: &TournamentConfig) -> Result<Self, GameError> {
        let deck = cfg.seed.map_or_else(Deck::secure, Deck::new_with_seed);
        let mut engine = Self::with_parts(deck, Box::new(StandardEvaluator));
        engine.reset_tournament(cfg.num_players, cfg.starting_stack, cfg.small_blind)?;
        Ok(engine)
    }

    pub fn players(&self) -> &[Player] {
        self.state.players()
    }
    pub fn tournament(&self) -> &TournamentState {
        &self.state
    }
    pub fn hand(&self) -> Option<&HandState> {
        self.hand.as_ref()
    }
    pub fn pot(&self) -> u32 {
        self.hand.as_ref().map_or(0, |h| h.pot)
    }
    pub fn acting_seat(&self) -> Option<usize> {
        self.hand.as_ref().and_then(|h| h.round.acting())
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }
    /// Record of the most recently finished hand.
    pub fn last_hand(&self) -> Option<&HandRecord> {
        self.last_hand.as_ref()
    }
    /// Set once the tournament is over.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }
    /// True once no hand is running and fewer than two seats hold chips.
    pub fn is_game_over(&self) -> bool {
        self.hand.is_none()
            && self.state.seat_count() > 0
            && self.state.seats_with_chips().len() < 2
    }

    /// Seats fresh players with equal stacks, puts the button on seat 0 and
    /// deals the first hand.
    pub fn reset_tournament(
        &mut self,
        num_players: usize,
        starting_stack: u32,
        small_blind: u32,
    ) -> Result<StateView, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidSetup(format!(
                "{} players requested, {}..={} supported",
                num_players, MIN_PLAYERS, MAX_PLAYERS
            )));
        }
        if starting_stack == 0 || small_blind == 0 {
            return Err(GameError::InvalidSetup(
                "starting stack and small blind must be positive".into(),
            ));
        }
        if u32::try_from(num_players as u64 * u64::from(starting_stack)).is_err() {
            return Err(GameError::InvalidSetup(format!(
                "{} seats of {} chips exceed the chip ledger",
                num_players, starting_stack
            )));
        }
        self.state = TournamentState::new(num_players, starting_stack, small_blind);
        self.hand = None;
        self.last_hand = None;
        self.hands_played = 0;
        self.winner = None;
        info!(num_players, starting_stack, small_blind, "tournament reset");
        self.reset_hand()
    }

    /// Starts a new hand. A hand still in progress is abandoned and every
    /// contribution refunded.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientPlayers`] once fewer than two players have chips.
    pub fn reset_hand(&mut self) -> Result<StateView, GameError> {
        self.abandon_hand();
        match self.next_hand()? {
            Status::GameOver => Err(GameError::InsufficientPlayers {
                remaining: self.state.seats_with_chips().len(),
            }),
            _ => Ok(self.view()),
        }
    }

    /// Blind level is driven from outside; the new small blind applies from
    /// the next hand and the big blind is always twice it.
    pub fn set_small_blind(&mut self, small_blind: u32) -> Result<(), GameError> {
        if small_blind == 0 {
            return Err(GameError::InvalidSetup("small blind must be positive".into()));
        }
        self.state.set_small_blind(small_blind);
        info!(
            level = self.state.blind_level(),
            small_blind,
            big_blind = self.state.big_blind(),
            "blinds raised"
        );
        Ok(())
    }

    /// Applies `action` for whichever seat is due to act.
    pub fn step(&mut self, action: Action) -> Result<(Status, StateView), GameError> {
        let seat = self
            .acting_seat()
            .ok_or(IllegalAction::NoHandInProgress)?;
        self.act(seat, action)
    }

    /// Applies `action` for `seat`, rejecting it when `seat` is not the one
    /// due to act.
    pub fn act(&mut self, seat: usize, action: Action) -> Result<(Status, StateView), GameError> {
        let validated = self
            .check_action(seat, action)
            .inspect_err(|e| warn!(seat, ?action, error = %e, "action rejected"))?;
        let status = match self.apply(seat, action, validated)? {
            Progress::AwaitingAction => Status::Playing,
            Progress::HandEnded => self.next_hand()?,
        };
        Ok((status, self.view()))
    }

    /// The acting seat's view, or the final table once no hand is running.
    pub fn view(&self) -> StateView {
        if let Some(hand) = &self.hand {
            if let Some(seat) = hand.round.acting() {
                let p = &self.state.players()[seat];
                return StateView {
                    hand_number: hand.number,
                    stage: hand.stage,
                    pot: hand.pot,
                    seat,
                    stack: p.stack(),
                    current_bet: p.current_bet(),
                    to_call: hand.round.watermark().saturating_sub(p.current_bet()),
                    min_raise_to: min_raise_to(hand.round.watermark(), hand.big_blind),
                    community: hand.community.clone(),
                    hole: p.hole_cards().to_vec(),
                };
            }
        }
        let seat = self.winner.unwrap_or_else(|| self.state.dealer());
        StateView {
            hand_number: self.hands_played,
            stage: Stage::Showdown,
            pot: 0,
            seat,
            stack: self.state.players().get(seat).map_or(0, Player::stack),
            current_bet: 0,
            to_call: 0,
            min_raise_to: 0,
            community: self
                .last_hand
                .as_ref()
                .map(|r| r.board.clone())
                .unwrap_or_default(),
            hole: Vec::new(),
        }
    }

    fn check_action(&self, seat: usize, action: Action) -> Result<ValidatedAction, GameError> {
        let hand = self.hand.as_ref().ok_or(IllegalAction::NoHandInProgress)?;
        let expected = hand.round.acting().ok_or(IllegalAction::NoHandInProgress)?;
        if seat != expected {
            return Err(IllegalAction::NotPlayersTurn {
                expected,
                actual: seat,
            }
            .into());
        }
        validate_action(
            &self.state.players()[seat],
            hand.round.watermark(),
            hand.big_blind,
            action,
        )
    }

    fn apply(
        &mut self,
        seat: usize,
        action: Action,
        validated: ValidatedAction,
    ) -> Result<Progress, GameError> {
        let hand = self.hand.as_mut().ok_or(IllegalAction::NoHandInProgress)?;
        let players = self.state.players_mut();
        let player = &mut players[seat];
        let moved = match validated {
            ValidatedAction::Fold => {
                player.fold();
                0
            }
            ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => player.post(n),
            ValidatedAction::Raise { to } => {
                let owed = to - player.current_bet();
                player.post(owed)
            }
        };
        hand.pot += moved;
        hand.round.record(seat, players);
        hand.record.actions.push(ActionRecord {
            seat,
            street: hand.stage,
            action,
            amount: moved,
        });
        debug!(
            hand = hand.number,
            seat,
            ?validated,
            pot = hand.pot,
            watermark = hand.round.watermark(),
            "action applied"
        );

        let mut contenders = players.iter().filter(|p| p.in_hand());
        if let (Some(last), None) = (contenders.next(), contenders.next()) {
            let winner = last.id();
            return self.conclude_hand(winner, None);
        }
        if hand.round.is_complete(players) {
            return self.close_streets();
        }
        let next = hand.round.first_to_act_after(players, seat);
        hand.round.set_acting(next);
        Ok(Progress::AwaitingAction)
    }

    /// Deals hands until one needs a decision or the tournament ends.
    fn next_hand(&mut self) -> Result<Status, GameError> {
        loop {
            let alive = self.state.seats_with_chips();
            if alive.len() < 2 {
                if self.winner.is_none() {
                    self.winner = alive.first().copied();
                    info!(winner = ?self.winner, hands = self.hands_played, "tournament over");
                }
                return Ok(Status::GameOver);
            }
            if let Progress::AwaitingAction = self.start_hand()? {
                return Ok(Status::HandOver);
            }
        }
    }

    fn start_hand(&mut self) -> Result<Progress, GameError> {
        let number = self.hands_played + 1;
        for p in self.state.players_mut() {
            p.reset_for_hand();
        }
        self.deck.shuffle();
        for seat in 0..self.state.seat_count() {
            if self.state.players()[seat].is_active() {
                let cards = self.deck.draw(2)?;
                self.state.players_mut()[seat].give_cards(cards);
            }
        }

        let dealer = self.state.dealer();
        let not_enough = || GameError::InsufficientPlayers { remaining: 1 };
        let sb_seat = self.state.next_seat(dealer, Player::is_active).ok_or_else(not_enough)?;
        let bb_seat = self.state.next_seat(sb_seat, Player::is_active).ok_or_else(not_enough)?;
        let (small_blind, big_blind) = (self.state.small_blind(), self.state.big_blind());

        let seats = self.state.seat_count();
        let players = self.state.players_mut();
        let pot = players[sb_seat].post(small_blind) + players[bb_seat].post(big_blind);
        let mut round = BettingRound::new(seats, big_blind);
        info!(hand = number, dealer, sb_seat, bb_seat, small_blind, big_blind, "hand started");

        let complete = round.is_complete(players);
        if !complete {
            let first = round.first_to_act_after(players, bb_seat);
            round.set_acting(first);
        }
        self.hand = Some(HandState {
            number,
            stage: Stage::Preflop,
            community: Vec::with_capacity(5),
            pot,
            big_blind,
            round,
            record: HandRecord {
                hand_id: None,
                hand_number: number,
                dealer,
                small_blind_seat: sb_seat,
                big_blind_seat: bb_seat,
                small_blind,
                big_blind,
                actions: Vec::new(),
                board: Vec::new(),
                pot: 0,
                winner: None,
                showdown: None,
                ts: None,
            },
        });
        if complete {
            // blinds alone left nobody with a decision to make
            return self.close_streets();
        }
        Ok(Progress::AwaitingAction)
    }

    /// Deals the following streets until one needs betting, running the
    /// board out when fewer than two seats can still act.
    fn close_streets(&mut self) -> Result<Progress, GameError> {
        loop {
            let hand = self.hand.as_mut().ok_or(IllegalAction::NoHandInProgress)?;
            let next = hand.stage.next();
            if next == Stage::Showdown {
                return self.showdown();
            }
            let cards = self.deck.draw(next.cards_on_entry())?;
            hand.community.extend(cards);
            hand.stage = next;

            let seats = self.state.seat_count();
            let dealer = self.state.dealer();
            let players = self.state.players_mut();
            for p in players.iter_mut() {
                p.reset_for_street();
            }
            hand.round = BettingRound::new(seats, 0);
            info!(hand = hand.number, stage = %next, pot = hand.pot, "street dealt");

            if !hand.round.is_complete(players) {
                let first = hand.round.first_to_act_after(players, dealer);
                hand.round.set_acting(first);
                return Ok(Progress::AwaitingAction);
            }
        }
    }

    fn showdown(&mut self) -> Result<Progress, GameError> {
        let hand = self.hand.as_mut().ok_or(IllegalAction::NoHandInProgress)?;
        hand.stage = Stage::Showdown;
        hand.round.set_acting(None);

        let players = self.state.players();
        let n = players.len();
        let dealer = self.state.dealer();
        // seat order from the left of the button settles ties
        let contenders: Vec<SeatScore> = (1..=n)
            .map(|k| (dealer + k) % n)
            .filter(|&s| players[s].in_hand())
            .map(|s| SeatScore {
                seat: s,
                score: self.evaluator.evaluate(&hand.community, players[s].hole_cards()),
                hole: players[s].hole_cards().to_vec(),
            })
            .collect();
        let best = contenders
            .iter()
            .min_by_key(|c| c.score)
            .ok_or(GameError::InsufficientPlayers { remaining: 0 })?;
        let winner = best.seat;
        let tied = contenders.iter().filter(|c| c.score == best.score).count() > 1;
        let info = ShowdownInfo {
            notes: tied.then(|| "tie broken by seat order".to_string()),
            contenders,
        };
        self.conclude_hand(winner, Some(info))
    }

    /// Awards the whole pot, retires busted seats and moves the button.
    fn conclude_hand(
        &mut self,
        winner: usize,
        showdown: Option<ShowdownInfo>,
    ) -> Result<Progress, GameError> {
        let hand = self.hand.take().ok_or(IllegalAction::NoHandInProgress)?;
        let pot = hand.pot;
        self.state.players_mut()[winner].add_chips(pot);
        info!(
            hand = hand.number,
            seat = winner,
            pot,
            showdown = showdown.is_some(),
            "pot awarded"
        );

        let mut record = hand.record;
        record.board = hand.community;
        record.pot = pot;
        record.winner = Some(winner);
        record.showdown = showdown;
        self.last_hand = Some(record);
        self.hands_played += 1;

        for p in self.state.players_mut() {
            if p.is_active() && p.stack() == 0 {
                p.eliminate();
                info!(seat = p.id(), hand = hand.number, "player eliminated");
            }
        }
        self.state.rotate_button();
        Ok(Progress::HandEnded)
    }

    fn abandon_hand(&mut self) {
        if let Some(hand) = self.hand.take() {
            for p in self.state.players_mut() {
                let refund = p.committed();
                p.add_chips(refund);
            }
            warn!(hand = hand.number, pot = hand.pot, "hand abandoned, contributions refunded");
        }
    }
}
