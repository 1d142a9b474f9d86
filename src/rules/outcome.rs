//! Final result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};
use crate::scoring::standings;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single top score.
    Winner(PlayerId),
    /// Several players share the top score, in turn order.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

impl GameState {
    /// The winner(s), once the game is over. Ties are shared.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let table = standings(self);
        let best = table.first()?.1.total_score;
        let mut winners: Vec<_> = table
            .into_iter()
            .take_while(|(_, score)| score.total_score == best)
            .map(|(id, _)| id)
            .collect();
        if winners.len() == 1 {
            winners.pop().map(GameResult::Winner)
        } else {
            Some(GameResult::Winners(winners))
        }
    }
}
