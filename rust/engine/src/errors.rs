use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Not enough players with chips to continue ({remaining} left)")]
    InsufficientPlayers { remaining: usize },
    #[error("Invalid tournament setup: {0}")]
    InvalidSetup(String),
}

/// Reasons an action is refused. A refused action never touches pot or stacks.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Raise to {amount} is below the minimum of {minimum}")]
    RaiseBelowMinimum { amount: u32, minimum: u32 },
    #[error("Player already folded")]
    PlayerFolded,
    #[error("Player is all-in")]
    PlayerAllIn,
    #[error("No hand in progress")]
    NoHandInProgress,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
