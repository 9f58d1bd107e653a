use crate::player::Player;

/// Fewest seats a tournament can start with
pub const MIN_PLAYERS: usize = 2;
/// Most seats a single table supports
pub const MAX_PLAYERS: usize = 9;

/// Seats, button and blinds for one tournament.
///
/// The seat list is fixed for the lifetime of the tournament; busted seats
/// stay in place (inactive) so seat indices remain stable.
#[derive(Debug, Clone)]
pub struct TournamentState {
    players: Vec<Player>,
    /// Seat index holding the dealer button
    dealer: usize,
    /// Bumped each time the small blind is changed from outside
    blind_level: u32,
    small_blind: u32,
}

impl TournamentState {
    pub fn new(num_players: usize, starting_stack: u32, small_blind: u32) -> Self {
        Self {
            players: (0..num_players)
                .map(|id| Player::new(id, starting_stack))
                .collect(),
            dealer: 0,
            blind_level: 1,
            small_blind,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn seat_count(&self) -> usize {
        self.players.len()
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn blind_level(&self) -> u32 {
        self.blind_level
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.small_blind.saturating_mul(2)
    }

    pub fn set_small_blind(&mut self, amount: u32) {
        self.small_blind = amount;
        self.blind_level += 1;
    }

    /// Moves the button one raw seat clockwise. Busted seats may hold the
    /// button; blinds are resolved from active seats after it.
    pub fn rotate_button(&mut self) {
        if !self.players.is_empty() {
            self.dealer = (self.dealer + 1) % self.players.len();
        }
    }

    /// First seat strictly after `from` (wrapping, `from` itself last) whose
    /// player satisfies `pred`.
    pub fn next_seat(&self, from: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&s| pred(&self.players[s]))
    }

    pub fn seats_with_chips(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| p.stack() > 0)
            .map(Player::id)
            .collect()
    }

    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.stack())).sum()
    }
}
