//! Slots: the places a tableware/snack pairing can sit.
//!
//! - `Slot` is used by the public grid and the personal and offering areas.
//!   It holds at most one tableware and at most one snack.
//! - `WaitingSlot` is used by the waiting area. It may stack several
//!   snacks on one tableware.
//!
//! Presence is always an `Option` or a list, never a sentinel, so a slot
//! cannot claim both a single snack and a snack list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub tableware: Option<Card>,
    pub snack: Option<Card>,
}

impl Slot {
    /// Create an empty slot.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tableware: None,
            snack: None,
        }
    }

    /// Create a slot holding a pairing.
    pub fn paired(id: impl Into<String>, tableware: Card, snack: Card) -> Self {
        Self {
            id: id.into(),
            tableware: Some(tableware),
            snack: Some(snack),
        }
    }

    /// True when the slot holds neither tableware nor a snack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tableware.is_none() && self.snack.is_none()
    }

    /// The (tableware, snack) pair, if both are present.
    #[must_use]
    pub fn pairing(&self) -> Option<(&Card, &Card)> {
        Some((self.tableware.as_ref()?, self.snack.as_ref()?))
    }

    /// Iterate over the cards in this slot.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.tableware.iter().chain(self.snack.iter())
    }
}

/// A slot in a player's waiting area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingSlot {
    pub id: String,
    pub tableware: Option<Card>,
    /// Usually zero or one snack; more only in the stacked variant.
    #[serde(default)]
    pub snacks: SmallVec<[Card; 1]>,
}

impl WaitingSlot {
    /// Create an empty waiting slot.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tableware: None,
            snacks: SmallVec::new(),
        }
    }

    /// Create a waiting slot holding only a tableware card.
    pub fn with_tableware(id: impl Into<String>, tableware: Card) -> Self {
        Self {
            tableware: Some(tableware),
            ..Self::new(id)
        }
    }

    #[must_use]
    pub fn has_snack(&self) -> bool {
        !self.snacks.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tableware.is_none() && self.snacks.is_empty()
    }

    /// Iterate over the cards in this slot.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.tableware.iter().chain(self.snacks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot = Slot::new("public-0");
        assert!(slot.is_empty());
        assert!(slot.pairing().is_none());
        assert_eq!(slot.cards().count(), 0);
    }

    #[test]
    fn test_half_filled_slot_is_not_empty() {
        let mut slot = Slot::new("public-0");
        slot.snack = Some(Card::snack("s1", "Bun"));
        assert!(!slot.is_empty());
        assert!(slot.pairing().is_none());
    }

    #[test]
    fn test_paired_slot() {
        let slot = Slot::paired("p-0", Card::tableware("t1", "Cup", 1), Card::snack("s1", "Bun"));
        let (ware, snack) = slot.pairing().unwrap();
        assert_eq!(ware.id.as_str(), "t1");
        assert_eq!(snack.id.as_str(), "s1");
        assert_eq!(slot.cards().count(), 2);
    }

    #[test]
    fn test_waiting_slot_stacks_snacks() {
        let mut slot = WaitingSlot::with_tableware("w-0", Card::tableware("t1", "Cup", 1));
        assert!(!slot.has_snack());

        slot.snacks.push(Card::snack("s1", "Bun"));
        slot.snacks.push(Card::snack("s2", "Cake"));
        assert!(slot.has_snack());
        assert_eq!(slot.cards().count(), 3);
    }

    #[test]
    fn test_waiting_slot_json_defaults_snacks() {
        let slot: WaitingSlot = serde_json::from_str(r#"{"id": "w-0", "tableware": null}"#).unwrap();
        assert!(slot.is_empty());
    }
}
