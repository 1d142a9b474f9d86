//! Scoring: pairing quality and end-of-game totals.
//!
//! All functions here are pure reads of cards and player state.
//!
//! ## Pairing score
//!
//! One point per attribute value the tableware and snack share, summed
//! over colors, shapes and temperatures. A two-color cup can earn 2 from
//! color alone.
//!
//! ## Final score
//!
//! ```text
//! total = Σ personal pairing scores
//!       + offering count (×2 with the jade chalice)
//!       − 2 × waiting slots still holding a snack
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameState, PlayerId, PlayerState};
use crate::zones::Slot;

/// Points lost per waiting slot that still holds a snack.
pub const WAITING_SNACK_PENALTY: i64 = 2;

/// Count of attribute values shared by a tableware and a snack card.
#[must_use]
pub fn pairing_score(tableware: &Card, snack: &Card) -> u32 {
    tableware.attributes.overlap(&snack.attributes)
}

/// Pairing score of a slot; 0 unless it holds both cards.
#[must_use]
pub fn slot_score(slot: &Slot) -> u32 {
    slot.pairing()
        .map_or(0, |(tableware, snack)| pairing_score(tableware, snack))
}

/// A player's score with each component broken out for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total_score: i64,
    /// Sum of pairing scores over the personal area.
    pub personal_sum: u32,
    /// Offering count, doubled for the chalice holder.
    pub offering_component: u32,
    /// Waiting slots holding at least one snack.
    pub waiting_penalty_count: u32,
    pub has_jade_chalice: bool,
}

/// Score a player.
///
/// ```
/// use jade_banquet::core::PlayerState;
/// use jade_banquet::scoring::final_score;
///
/// let score = final_score(&PlayerState::default());
/// assert_eq!(score.total_score, 0);
/// ```
#[must_use]
pub fn final_score(player: &PlayerState) -> ScoreBreakdown {
    let personal_sum: u32 = player.personal_area.iter().map(slot_score).sum();

    let offerings = player.offering_area.len() as u32;
    let offering_component = if player.has_jade_chalice {
        offerings * 2
    } else {
        offerings
    };

    let waiting_penalty_count = player
        .waiting_area
        .iter()
        .filter(|slot| slot.has_snack())
        .count() as u32;

    let total_score = i64::from(personal_sum) + i64::from(offering_component)
        - WAITING_SNACK_PENALTY * i64::from(waiting_penalty_count);

    ScoreBreakdown {
        total_score,
        personal_sum,
        offering_component,
        waiting_penalty_count,
        has_jade_chalice: player.has_jade_chalice,
    }
}

/// Every player's score, best first.
///
/// Equal totals keep turn order.
#[must_use]
pub fn standings(state: &GameState) -> Vec<(PlayerId, ScoreBreakdown)> {
    let mut rows: Vec<_> = state
        .players
        .seating_order()
        .into_iter()
        .map(|id| (id, final_score(&state.players[id])))
        .collect();
    // Stable sort: ties stay in turn order.
    rows.sort_by(|a, b| b.1.total_score.cmp(&a.1.total_score));
    rows
}
