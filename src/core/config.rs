//! Game configuration.
//!
//! `GameConfig` carries the table-level knobs a host chooses before
//! setup. Card content lives in [`CardCatalog`](crate::cards::CardCatalog),
//! not here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Action points every player receives at the start of their turn.
pub const ACTION_POINTS_PER_TURN: u32 = 3;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table (player ids are `u8`, `255` is reserved).
pub const MAX_PLAYERS: usize = 255;

/// Invalid game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 255, got {0}")]
    PlayerCount(usize),

    #[error("waiting area capacity must be at least 1")]
    WaitingAreaCapacity,

    #[error("malformed game config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Table configuration.
///
/// ## Example
///
/// ```
/// use jade_banquet::core::GameConfig;
///
/// let config = GameConfig::new(4).with_starting_tea_tokens(1);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.waiting_area_capacity, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Number of seated players.
    pub player_count: usize,

    /// Tea tokens each player holds at setup.
    #[serde(default)]
    pub starting_tea_tokens: u32,

    /// Waiting-area slot limit. Enforced by the move layer, not the engine.
    #[serde(default = "default_waiting_area_capacity")]
    pub waiting_area_capacity: usize,
}

fn default_waiting_area_capacity() -> usize {
    3
}

impl GameConfig {
    /// Create a configuration with default values for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            starting_tea_tokens: 0,
            waiting_area_capacity: default_waiting_area_capacity(),
        }
    }

    /// Set the tea tokens each player starts with.
    #[must_use]
    pub fn with_starting_tea_tokens(mut self, tokens: u32) -> Self {
        self.starting_tea_tokens = tokens;
        self
    }

    /// Set the waiting-area slot limit.
    #[must_use]
    pub fn with_waiting_area_capacity(mut self, capacity: usize) -> Self {
        self.waiting_area_capacity = capacity;
        self
    }

    /// Check the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.waiting_area_capacity == 0 {
            return Err(ConfigError::WaitingAreaCapacity);
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
