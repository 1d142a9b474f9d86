//! # jade-banquet
//!
//! Deterministic game-state engine for a tableware-and-snack pairing card
//! game.
//!
//! Players draw tableware and snack cards from shared decks, pair them on a
//! 3×3 public grid and in their own areas, and score by pairing quality,
//! offerings, and the transferable Jade Chalice bonus.
//!
//! ## Scope
//!
//! This crate is the rules core only: state-mutation primitives and pure
//! calculators. Deciding whether a player action is legal, and moving cards
//! between areas for that action, belongs to the move-dispatch layer that
//! drives it. Rendering and transport also live outside.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: every shuffle draws from a caller-seeded
//!    `GameRng`, so a seed fully determines the initial state.
//!
//! 2. **Cards are owned, never copied**: containers hold `Card` by value,
//!    so a card is always in exactly one place.
//!
//! 3. **Single writer**: `GameState` is mutated in place by one caller at a
//!    time. Each mutating primitive documents its pre/postconditions.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, `GameState`, snapshots
//! - `cards`: attributes, cards, decks, authored content
//! - `zones`: slots and the public grid with its refill mechanic
//! - `scoring`: pairing and final scores
//! - `rules`: turn advance, end-of-game latch, results
//!
//! ## Example
//!
//! ```
//! use jade_banquet::{create_initial_state, GameRng};
//!
//! let mut state = create_initial_state(2, &mut GameRng::new(42));
//!
//! // The move layer takes a plate from the centre, then refills.
//! let plate = state.public_area.take_tableware(4);
//! assert!(plate.is_some());
//! state.refresh_grid_tableware(4);
//! assert!(state.public_area.slot(4).tableware.is_some());
//!
//! state.advance_turn();
//! assert!(!state.is_game_over());
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod scoring;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    create_initial_state, ConfigError, GameConfig, GameRng, GameRngState, GameState, PlayerId, PlayerMap,
    PlayerState, SetupError, SnapshotError, StateError, ACTION_POINTS_PER_TURN,
};

pub use crate::cards::{
    AttrSet, Attribute, Attributes, Card, CardCatalog, CardId, CardKind, CatalogError, Color, Deck, Shape,
    Temperature,
};

pub use crate::zones::{PublicGrid, Slot, WaitingSlot};

pub use crate::scoring::{final_score, pairing_score, slot_score, standings, ScoreBreakdown};

pub use crate::rules::{EndCondition, GameResult};
