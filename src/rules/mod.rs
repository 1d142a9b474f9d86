//! Game progression rules.
//!
//! The engine only advances turns and detects the end of the game. Which
//! player actions are legal, and how the jade chalice changes hands, is
//! decided by the move-dispatch layer that calls into this crate.

pub mod outcome;
pub mod turn;

pub use outcome::GameResult;
pub use turn::EndCondition;
