//! Core engine types: players, RNG, configuration, state and snapshots.

pub mod config;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::{ConfigError, GameConfig, ACTION_POINTS_PER_TURN, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{ParsePlayerIdError, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use snapshot::SnapshotError;
pub use state::{create_initial_state, GameState, PlayerState, SetupError, StateError};
