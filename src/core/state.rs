//! Game state: decks, grid, players and progress markers.
//!
//! ## GameState
//!
//! The single mutable aggregate a session owns. It is created once by
//! [`GameState::from_setup`] (or [`create_initial_state`]) and then mutated
//! in place, one caller at a time:
//!
//! - by the move-dispatch layer, which moves cards between areas
//! - by the engine primitives: grid refill and turn advance
//!
//! Its serde form is the wire shape exchanged with clients.
//!
//! ## Conservation
//!
//! Every card the catalog authored is in exactly one of: the three decks,
//! a grid slot, or a player's waiting, personal or offering area.
//! [`GameState::verify_conservation`] audits this.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::config::{ConfigError, GameConfig, ACTION_POINTS_PER_TURN};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardCatalog, CardId, Deck};
use crate::rules::EndCondition;
use crate::zones::{PublicGrid, Slot, WaitingSlot, GRID_SLOTS};

/// Failure building the initial state.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A broken state invariant, found by an audit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("card {0} appears {1} times")]
    DuplicateCard(CardId, usize),

    #[error("card {0} has gone missing")]
    MissingCard(CardId),

    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("jade chalice held by {0} players")]
    MultipleChaliceHolders(usize),

    #[error("player {0} holds the jade chalice but it was never granted")]
    ChaliceNotGranted(PlayerId),

    #[error("current player {0} is not seated")]
    CurrentPlayerNotSeated(PlayerId),
}

/// Everything one player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// In-progress pairings. Snacks left here are penalized at scoring.
    pub waiting_area: Vec<WaitingSlot>,

    /// Committed pairings, scored by pairing quality.
    pub personal_area: Vec<Slot>,

    /// Donated pairings, scored per item.
    pub offering_area: Vec<Slot>,

    pub action_points: u32,

    pub tea_tokens: u32,

    /// The once-per-turn taste action has been used.
    pub taste_used: bool,

    /// The once-per-turn token spend has been used.
    pub token_used: bool,

    pub has_jade_chalice: bool,
}

impl PlayerState {
    /// Restore the per-turn resources at the start of this player's turn.
    pub fn start_turn(&mut self) {
        self.action_points = ACTION_POINTS_PER_TURN;
        self.taste_used = false;
        self.token_used = false;
    }

    /// Iterate over every card this player holds, in any area.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.waiting_area
            .iter()
            .flat_map(WaitingSlot::cards)
            .chain(self.personal_area.iter().flat_map(Slot::cards))
            .chain(self.offering_area.iter().flat_map(Slot::cards))
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub snack_deck: Deck,

    /// Level-1 tableware draw pile.
    pub tableware_deck: Deck,

    /// Level-2/3 tableware: grid backfill and action rewards.
    pub reward_deck: Deck,

    pub public_area: PublicGrid,

    pub players: PlayerMap<PlayerState>,

    /// Whether the jade chalice has ever been handed out.
    pub jade_chalice_granted: bool,

    pub current_player: PlayerId,

    /// Round counter, starting at 1 and bumped whenever play returns to `"0"`.
    #[serde(rename = "turn")]
    pub round: u32,

    #[serde(rename = "endConditionTriggeredAtRound")]
    pub end_condition: EndCondition,
}

/// Create a game for `player_count` players with default settings and the
/// standard card set.
///
/// Panics if `player_count` is outside 2-255.
///
/// ```
/// use jade_banquet::core::{create_initial_state, GameRng, PlayerId};
///
/// let state = create_initial_state(3, &mut GameRng::new(1));
/// assert_eq!(state.player_count(), 3);
/// assert_eq!(state.current_player, PlayerId::new(0));
/// ```
#[must_use]
pub fn create_initial_state(player_count: usize, rng: &mut GameRng) -> GameState {
    let config = GameConfig::new(player_count);
    match GameState::from_setup(&config, &CardCatalog::standard(), rng) {
        Ok(state) => state,
        Err(err) => panic!("cannot start a game: {err}"),
    }
}

impl GameState {
    /// Shuffle the catalog into decks, deal and stock the grid.
    ///
    /// 1. Shuffle snacks, level-1 tableware and rewards, in that order.
    /// 2. Deal one level-1 tableware to each player, in turn order, into a
    ///    fresh waiting slot.
    /// 3. Stock grid slots 0-8 in index order: a level-1 tableware, then a
    ///    snack. Exhausted piles leave slots empty; the reward pile is not
    ///    touched.
    pub fn from_setup(
        config: &GameConfig,
        catalog: &CardCatalog,
        rng: &mut GameRng,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let mut decks = catalog.starting_decks();
        decks.snacks.shuffle(rng);
        decks.tableware.shuffle(rng);
        decks.rewards.shuffle(rng);

        let mut players: PlayerMap<PlayerState> = PlayerMap::new(config.player_count, |_| PlayerState {
            action_points: ACTION_POINTS_PER_TURN,
            tea_tokens: config.starting_tea_tokens,
            ..PlayerState::default()
        });

        for player in players.seating_order() {
            if let Some(card) = decks.tableware.draw() {
                players[player]
                    .waiting_area
                    .push(WaitingSlot::with_tableware(format!("waiting-{player}-0"), card));
            }
        }

        let mut grid = PublicGrid::new();
        for i in 0..GRID_SLOTS {
            let slot = grid.slot_mut(i);
            slot.tableware = decks.tableware.draw();
            slot.snack = decks.snacks.draw();
        }

        debug!(
            players = config.player_count,
            seed = rng.seed(),
            snacks = decks.snacks.len(),
            tableware = decks.tableware.len(),
            rewards = decks.rewards.len(),
            "game set up"
        );

        Ok(Self {
            snack_deck: decks.snacks,
            tableware_deck: decks.tableware,
            reward_deck: decks.rewards,
            public_area: grid,
            players,
            jade_chalice_granted: false,
            current_player: PlayerId::FIRST,
            round: 1,
            end_condition: EndCondition::Pending,
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// State of the player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// Mutable state of the player whose turn it is.
    pub fn current_mut(&mut self) -> &mut PlayerState {
        &mut self.players[self.current_player]
    }

    /// Refill missing snacks around a grid slot.
    ///
    /// Precondition: `index < 9`, and the caller has just removed a card
    /// from that slot.
    /// Postcondition: every slot in its row and column holds a snack, or
    /// the snack deck is empty.
    pub fn refresh_grid_snacks(&mut self, index: usize) {
        self.public_area.refill_snacks(index, &mut self.snack_deck);
    }

    /// Refill missing tableware around a grid slot.
    ///
    /// Precondition: `index < 9`, and the caller has just removed a card
    /// from that slot.
    /// Postcondition: every slot in its row and column holds tableware, or
    /// both the level-1 deck and the reward deck's level-2 cards are spent.
    pub fn refresh_grid_tableware(&mut self, index: usize) {
        self.public_area
            .refill_tableware(index, &mut self.tableware_deck, &mut self.reward_deck);
    }

    /// The player currently holding the jade chalice, if any.
    ///
    /// With more than one holder (a broken invariant) returns the first.
    #[must_use]
    pub fn jade_chalice_holder(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.has_jade_chalice)
            .map(|(id, _)| id)
    }

    /// Iterate over every card in the game: decks, grid and player areas.
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.snack_deck
            .cards()
            .iter()
            .chain(self.tableware_deck.cards())
            .chain(self.reward_deck.cards())
            .chain(self.public_area.cards())
            .chain(self.players.iter().flat_map(|(_, p)| p.cards()))
            .map(|card| &card.id)
    }

    /// Check that the cards in play are exactly the catalog's cards.
    pub fn verify_conservation(&self, catalog: &CardCatalog) -> Result<(), StateError> {
        let mut seen: FxHashMap<&CardId, usize> = FxHashMap::default();
        for id in self.card_ids() {
            *seen.entry(id).or_default() += 1;
        }

        for (id, &count) in &seen {
            if !catalog.contains(id) {
                return Err(StateError::UnknownCard((*id).clone()));
            }
            if count > 1 {
                return Err(StateError::DuplicateCard((*id).clone(), count));
            }
        }
        if let Some(missing) = catalog.iter().find(|c| !seen.contains_key(&c.id)) {
            return Err(StateError::MissingCard(missing.id.clone()));
        }
        Ok(())
    }

    /// Check the structural invariants the move layer must uphold.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        if !self.players.contains(self.current_player) {
            return Err(StateError::CurrentPlayerNotSeated(self.current_player));
        }
        let holders: Vec<_> = self
            .players
            .iter()
            .filter(|(_, p)| p.has_jade_chalice)
            .map(|(id, _)| id)
            .collect();
        match holders.as_slice() {
            [] => Ok(()),
            [holder] if !self.jade_chalice_granted => Err(StateError::ChaliceNotGranted(*holder)),
            [_] => Ok(()),
            many => Err(StateError::MultipleChaliceHolders(many.len())),
        }
    }
}
