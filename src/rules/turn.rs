//! Turn advance and end-of-game detection.
//!
//! Progress is `(current_player, round, end_condition)`. Each call to
//! [`GameState::advance_turn`] passes play to the next seat, and returning
//! to seat `"0"` opens a new round.
//!
//! Once the reward pile runs out of level-2 tableware the end condition
//! latches at the current round. Every player then gets one more full
//! round, and the game ends at the first round boundary at least
//! `player_count` rounds after the latch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameState, PlayerId};
use crate::zones::BACKFILL_LEVEL;

/// One-way end-of-game latch.
///
/// Serialized as the nullable round number `endConditionTriggeredAtRound`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum EndCondition {
    #[default]
    Pending,
    TriggeredAt(u32),
}

impl EndCondition {
    /// Latch at `round`. Has no effect once triggered.
    ///
    /// Returns true if this call latched.
    pub fn trigger(&mut self, round: u32) -> bool {
        match self {
            EndCondition::Pending => {
                *self = EndCondition::TriggeredAt(round);
                true
            }
            EndCondition::TriggeredAt(_) => false,
        }
    }

    #[must_use]
    pub fn triggered_at(self) -> Option<u32> {
        match self {
            EndCondition::Pending => None,
            EndCondition::TriggeredAt(round) => Some(round),
        }
    }

    #[must_use]
    pub fn is_triggered(self) -> bool {
        matches!(self, EndCondition::TriggeredAt(_))
    }
}

impl From<Option<u32>> for EndCondition {
    fn from(value: Option<u32>) -> Self {
        value.map_or(EndCondition::Pending, EndCondition::TriggeredAt)
    }
}

impl From<EndCondition> for Option<u32> {
    fn from(value: EndCondition) -> Self {
        value.triggered_at()
    }
}

impl GameState {
    /// The seat that plays after the current one.
    ///
    /// Panics if the current player is not seated.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        let order = self.players.seating_order();
        let pos = order
            .iter()
            .position(|&id| id == self.current_player)
            .unwrap_or_else(|| panic!("current player {} is not seated", self.current_player));
        order[(pos + 1) % order.len()]
    }

    /// End the current turn.
    ///
    /// Precondition: `current_player` is seated.
    /// Postcondition: `current_player` is the next seat, with 3 action points
    /// and both per-turn flags cleared; `round` has grown by one if play
    /// returned to `"0"`; the end condition is latched if the reward pile
    /// holds no level-2 card.
    pub fn advance_turn(&mut self) {
        let next = self.next_player();
        self.current_player = next;
        self.players[next].start_turn();

        if next == PlayerId::FIRST {
            self.round += 1;
        }

        if !self.end_condition.is_triggered()
            && self.reward_deck.count_level(BACKFILL_LEVEL) == 0
            && self.end_condition.trigger(self.round)
        {
            info!(round = self.round, "reward pile exhausted, final rounds begin");
        }

        debug!(player = %next, round = self.round, "turn advanced");
    }

    /// Whether the game has ended.
    ///
    /// True only at a round boundary (seat `"0"` to act) at least
    /// `player_count` rounds after the end condition latched.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        match self.end_condition {
            EndCondition::Pending => false,
            EndCondition::TriggeredAt(round) => {
                self.current_player == PlayerId::FIRST
                    && self.round.saturating_sub(round) as usize >= self.player_count()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{create_initial_state, GameRng};

    fn drain_level_two(state: &mut GameState) {
        while state.reward_deck.take_first_of_level(BACKFILL_LEVEL).is_some() {}
    }

    #[test]
    fn test_trigger_is_one_way() {
        let mut end = EndCondition::Pending;
        assert!(end.trigger(4));
        assert!(!end.trigger(9));
        assert_eq!(end, EndCondition::TriggeredAt(4));
        assert_eq!(end.triggered_at(), Some(4));
    }

    #[test]
    fn test_end_condition_serde() {
        assert_eq!(serde_json::to_string(&EndCondition::Pending).unwrap(), "null");
        assert_eq!(serde_json::to_string(&EndCondition::TriggeredAt(3)).unwrap(), "3");
        assert_eq!(
            serde_json::from_str::<EndCondition>("7").unwrap(),
            EndCondition::TriggeredAt(7)
        );
        assert_eq!(
            serde_json::from_str::<EndCondition>("null").unwrap(),
            EndCondition::Pending
        );
    }

    #[test]
    fn test_advance_resets_next_player() {
        let mut state = create_initial_state(2, &mut GameRng::new(1));
        let p1 = PlayerId::new(1);
        state.players[p1].action_points = 0;
        state.players[p1].taste_used = true;
        state.players[p1].token_used = true;

        state.advance_turn();

        assert_eq!(state.current_player, p1);
        assert_eq!(state.players[p1].action_points, 3);
        assert!(!state.players[p1].taste_used);
        assert!(!state.players[p1].token_used);
    }

    #[test]
    fn test_advance_leaves_previous_player_alone() {
        let mut state = create_initial_state(2, &mut GameRng::new(1));
        state.players[PlayerId::new(0)].action_points = 1;
        state.advance_turn();
        assert_eq!(state.players[PlayerId::new(0)].action_points, 1);
    }

    #[test]
    fn test_round_increments_on_wrap() {
        let mut state = create_initial_state(3, &mut GameRng::new(1));
        state.advance_turn();
        state.advance_turn();
        assert_eq!(state.round, 1);
        state.advance_turn();
        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.round, 2);
    }

    #[test]
    fn test_no_latch_while_level_two_remains() {
        let mut state = create_initial_state(2, &mut GameRng::new(1));
        for _ in 0..10 {
            state.advance_turn();
        }
        assert_eq!(state.end_condition, EndCondition::Pending);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_level_three_cards_do_not_delay_latch() {
        let mut state = create_initial_state(2, &mut GameRng::new(1));
        drain_level_two(&mut state);
        assert_eq!(state.reward_deck.count_level(3), 3);

        state.advance_turn();

        assert_eq!(state.end_condition, EndCondition::TriggeredAt(1));
    }

    #[test]
    fn test_latch_uses_round_after_increment() {
        let mut state = create_initial_state(2, &mut GameRng::new(1));
        state.advance_turn();
        drain_level_two(&mut state);

        state.advance_turn();

        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.round, 2);
        assert_eq!(state.end_condition, EndCondition::TriggeredAt(2));
    }

    #[test]
    #[should_panic(expected = "is not seated")]
    fn test_unseated_current_player_panics() {
        let mut state = create_initial_state(2, &mut GameRng::new(1));
        state.current_player = PlayerId::new(7);
        state.advance_turn();
    }
}
