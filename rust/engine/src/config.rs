//! Tournament configuration.
//!
//! Values are layered: built-in defaults, then a TOML file named by
//! `SPINGO_CONFIG`, then individual `SPINGO_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::game::{MAX_PLAYERS, MIN_PLAYERS};
use crate::player::STARTING_STACK;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentConfig {
    pub num_players: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    /// Hand cap used by match drivers; the engine itself has no cap
    pub max_hands: u32,
    /// Fixed shuffle seed for reproducible play; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            num_players: 3,
            starting_stack: STARTING_STACK,
            small_blind: 10,
            max_hands: 30,
            seed: None,
        }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::Invalid(format!(
                "num_players must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.num_players
            )));
        }
        if self.starting_stack == 0 {
            return Err(ConfigError::Invalid("starting_stack must be positive".into()));
        }
        if u32::try_from(self.num_players as u64 * u64::from(self.starting_stack)).is_err() {
            return Err(ConfigError::Invalid(format!(
                "{} seats of {} chips exceed the chip ledger",
                self.num_players, self.starting_stack
            )));
        }
        if self.small_blind == 0 {
            return Err(ConfigError::Invalid("small_blind must be positive".into()));
        }
        if self.max_hands == 0 {
            return Err(ConfigError::Invalid("max_hands must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub num_players: ValueSource,
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub max_hands: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            num_players: ValueSource::Default,
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            max_hands: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: TournamentConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    num_players: Option<usize>,
    starting_stack: Option<u32>,
    small_blind: Option<u32>,
    max_hands: Option<u32>,
    seed: Option<u64>,
}

pub fn load() -> Result<TournamentConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = TournamentConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SPINGO_CONFIG") {
        apply_file(&mut cfg, &mut sources, Path::new(&path))?;
    }

    if let Some(v) = env_value("SPINGO_PLAYERS")? {
        cfg.num_players = v;
        sources.num_players = ValueSource::Env;
    }
    if let Some(v) = env_value("SPINGO_STACK")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_value("SPINGO_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("SPINGO_MAX_HANDS")? {
        cfg.max_hands = v;
        sources.max_hands = ValueSource::Env;
    }
    if let Some(v) = env_value("SPINGO_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }

    cfg.validate()?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn apply_file(
    cfg: &mut TournamentConfig,
    sources: &mut ConfigSources,
    path: &Path,
) -> Result<(), ConfigError> {
    let s = fs::read_to_string(path)?;
    let f: FileConfig = toml::from_str(&s)?;
    if let Some(v) = f.num_players {
        cfg.num_players = v;
        sources.num_players = ValueSource::File;
    }
    if let Some(v) = f.starting_stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::File;
    }
    if let Some(v) = f.small_blind {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::File;
    }
    if let Some(v) = f.max_hands {
        cfg.max_hands = v;
        sources.max_hands = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    Ok(())
}

/// Reads and parses an env var; unset or empty means "not provided".
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{key}={raw:?} is not a valid value"))),
        _ => Ok(None),
    }
}
