//! The 3×3 public grid and its refill mechanic.
//!
//! Slot index `i` sits at row `i / 3`, column `i % 3`:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! When tableware is taken from a slot, every slot sharing its row or
//! column may turn over a replacement. Refill visits the row first, then
//! the column slots not already visited; for the centre that is
//! `[3, 4, 5, 1, 7]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::slot::Slot;
use crate::cards::{Card, Deck};

pub const GRID_SIDE: usize = 3;
pub const GRID_SLOTS: usize = GRID_SIDE * GRID_SIDE;

/// Level pulled from the reward pile when the level-1 pile is exhausted.
pub const BACKFILL_LEVEL: u8 = 2;

/// The three slot indices sharing a row with `index`.
#[must_use]
pub fn row_indices(index: usize) -> [usize; GRID_SIDE] {
    debug_assert!(index < GRID_SLOTS, "grid index {index} out of range");
    let start = (index / GRID_SIDE) * GRID_SIDE;
    [start, start + 1, start + 2]
}

/// The three slot indices sharing a column with `index`.
#[must_use]
pub fn column_indices(index: usize) -> [usize; GRID_SIDE] {
    debug_assert!(index < GRID_SLOTS, "grid index {index} out of range");
    let col = index % GRID_SIDE;
    [col, col + GRID_SIDE, col + 2 * GRID_SIDE]
}

/// Row ∪ column of `index`, row first, without duplicates.
#[must_use]
pub fn affected_indices(index: usize) -> SmallVec<[usize; 5]> {
    let mut out: SmallVec<[usize; 5]> = row_indices(index).into_iter().collect();
    for i in column_indices(index) {
        if !out.contains(&i) {
            out.push(i);
        }
    }
    out
}

/// The public grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicGrid {
    slots: [Slot; GRID_SLOTS],
}

impl Default for PublicGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicGrid {
    /// Nine empty slots with ids `public-0` to `public-8`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|i| Slot::new(format!("public-{i}"))),
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot; GRID_SLOTS] {
        &self.slots
    }

    /// Borrow a slot. Panics if `index >= 9`.
    #[must_use]
    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Mutably borrow a slot. Panics if `index >= 9`.
    pub fn slot_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.slots[index]
    }

    /// Move the tableware out of a slot.
    pub fn take_tableware(&mut self, index: usize) -> Option<Card> {
        self.slots[index].tableware.take()
    }

    /// Move the snack out of a slot.
    pub fn take_snack(&mut self, index: usize) -> Option<Card> {
        self.slots[index].snack.take()
    }

    /// Iterate over every card on the grid.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().flat_map(Slot::cards)
    }

    /// Put one snack into every slot in the row and column of `index` that
    /// lacks one, drawing from the top of `snacks` until it runs out.
    ///
    /// Returns the number of snacks placed.
    pub fn refill_snacks(&mut self, index: usize, snacks: &mut Deck) -> usize {
        let mut placed = 0;
        for i in affected_indices(index) {
            let slot = &mut self.slots[i];
            if slot.snack.is_some() {
                continue;
            }
            let Some(card) = snacks.draw() else { break };
            trace!(slot = i, card = %card.id, "refilled snack");
            slot.snack = Some(card);
            placed += 1;
        }
        placed
    }

    /// Put one tableware into every slot in the row and column of `index`
    /// that lacks one.
    ///
    /// Each slot draws from the top of `tableware`; once that pile is empty
    /// it pulls the first level-2 card found in `rewards` instead. A slot
    /// stays empty when neither source has a card.
    ///
    /// Returns the number of tableware cards placed.
    pub fn refill_tableware(&mut self, index: usize, tableware: &mut Deck, rewards: &mut Deck) -> usize {
        let mut placed = 0;
        for i in affected_indices(index) {
            let slot = &mut self.slots[i];
            if slot.tableware.is_some() {
                continue;
            }
            let Some(card) = tableware
                .draw()
                .or_else(|| rewards.take_first_of_level(BACKFILL_LEVEL))
            else {
                break;
            };
            trace!(slot = i, card = %card.id, level = card.level, "refilled tableware");
            slot.tableware = Some(card);
            placed += 1;
        }
        placed
    }
}
