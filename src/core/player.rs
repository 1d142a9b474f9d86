//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat identifier. On the wire a player id is its decimal string
//! (`"0"`, `"1"`, ...), so `PlayerId` serializes through `String`.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access. Serializes as an
//! object keyed by the decimal player ids.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error parsing a player id from its decimal string form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid player id {0:?}: expected a decimal seat number 0-254")]
pub struct ParsePlayerIdError(pub String);

/// Player identifier supporting 2-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`, written
/// `"0"` in serialized state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who opens every round.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use jade_banquet::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ParsePlayerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Canonical form only: "07" and "+1" are not seat ids.
        let canonical = s == "0" || (!s.starts_with('0') && s.bytes().all(|b| b.is_ascii_digit()));
        match s.parse::<u8>() {
            Ok(id) if canonical && id < u8::MAX => Ok(PlayerId(id)),
            _ => Err(ParsePlayerIdError(s.to_string())),
        }
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PlayerId {
    type Error = ParsePlayerIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seated player. Indexing with a
/// player that is not seated panics: an unknown id is an integration bug,
/// not a recoverable condition.
///
/// ## Example
///
/// ```
/// use jade_banquet::core::{PlayerId, PlayerMap};
///
/// let mut tokens: PlayerMap<u32> = PlayerMap::new(3, |_| 1);
/// tokens[PlayerId::new(2)] += 4;
/// assert_eq!(tokens[PlayerId::new(2)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `player` is seated in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        let count = self.data.len();
        self.data
            .get(player.index())
            .unwrap_or_else(|| panic!("player {player} is not seated ({count} players)"))
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        let count = self.data.len();
        self.data
            .get_mut(player.index())
            .unwrap_or_else(|| panic!("player {player} is not seated ({count} players)"))
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs in numeric order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }

    /// Player ids in turn order.
    ///
    /// Turn order sorts ids by their decimal string, so with ten or more
    /// players `"10"` sits between `"1"` and `"2"`.
    #[must_use]
    pub fn seating_order(&self) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self.player_ids().collect();
        ids.sort_by_key(|id| id.to_string());
        ids
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

impl<T: Serialize> Serialize for PlayerMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PlayerMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PlayerMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for PlayerMapVisitor<T> {
            type Value = PlayerMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by contiguous player ids \"0\"..\"n-1\"")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut entries = BTreeMap::new();
                while let Some((id, value)) = access.next_entry::<PlayerId, T>()? {
                    if entries.insert(id, value).is_some() {
                        return Err(M::Error::custom(format!("duplicate player id {id}")));
                    }
                }
                if entries.is_empty() {
                    return Err(M::Error::custom("player map must seat at least 1 player"));
                }
                for (expected, id) in entries.keys().enumerate() {
                    if id.index() != expected {
                        return Err(M::Error::custom(format!(
                            "player ids must be contiguous from 0, found {id} at position {expected}"
                        )));
                    }
                }
                Ok(PlayerMap {
                    data: entries.into_values().collect(),
                })
            }
        }

        deserializer.deserialize_map(PlayerMapVisitor(PhantomData))
    }
}
