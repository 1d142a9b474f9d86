//! Card locations on the table.
//!
//! ## Key Types
//!
//! - `Slot`: one tableware and one snack position (grid, personal, offering)
//! - `WaitingSlot`: a waiting-area position that may stack snacks
//! - `PublicGrid`: the shared 3×3 grid and its row/column refill

pub mod grid;
pub mod slot;

pub use grid::{
    affected_indices, column_indices, row_indices, PublicGrid, BACKFILL_LEVEL, GRID_SIDE, GRID_SLOTS,
};
pub use slot::{Slot, WaitingSlot};
