//! Unseen draw piles.
//!
//! A `Deck` is an ordered pile whose top is the end of the backing vector,
//! so drawing is a `pop`.

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::GameRng;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck whose last element is the top card.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card that the next `draw` returns.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Take the top card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Number of cards of the given level.
    #[must_use]
    pub fn count_level(&self, level: u8) -> usize {
        self.cards.iter().filter(|c| c.level == level).count()
    }

    /// Remove and return the first card (from the bottom) with `level`.
    ///
    /// Used for deterministic reward pulls: not a random pick.
    pub fn take_first_of_level(&mut self, level: u8) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.level == level)?;
        Some(self.cards.remove(pos))
    }

    /// Replace the pile with a uniformly shuffled copy of itself.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.cards = rng.shuffled(&self.cards);
    }
}
