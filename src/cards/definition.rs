//! Card definitions.
//!
//! A `Card` is created once from authored content and then only moves
//! between containers (decks, grid slots, player areas). It is never
//! copied into two places: containers own their cards by value.

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;

/// Unique identifier for a card, e.g. `"ware1-04"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which deck family a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Snack,
    Tableware,
}

/// A single physical card.
///
/// ## Example
///
/// ```
/// use jade_banquet::cards::{Card, Color, Shape, Temperature, Attributes};
///
/// let cup = Card::tableware("ware1-01", "Red Round Cup", 1)
///     .with_attributes(Attributes::single(Color::Red, Shape::Circle, Temperature::Warm));
///
/// assert!(cup.is_tableware());
/// assert_eq!(cup.attributes.value_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    #[serde(rename = "type")]
    pub kind: CardKind,

    /// Display name.
    pub name: String,

    pub attributes: Attributes,

    /// 1 for every snack; 1-3 for tableware.
    pub level: u8,

    #[serde(default)]
    pub description: Option<String>,
}

impl Card {
    /// Create a snack card (always level 1) with no attributes yet.
    pub fn snack(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, CardKind::Snack, name, 1)
    }

    /// Create a tableware card of the given level with no attributes yet.
    pub fn tableware(id: impl Into<String>, name: impl Into<String>, level: u8) -> Self {
        Self::new(id, CardKind::Tableware, name, level)
    }

    fn new(id: impl Into<String>, kind: CardKind, name: impl Into<String>, level: u8) -> Self {
        Self {
            id: CardId::new(id),
            kind,
            name: name.into(),
            attributes: Attributes::default(),
            level,
            description: None,
        }
    }

    /// Set the attribute sets (builder pattern).
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the flavour text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn is_snack(&self) -> bool {
        self.kind == CardKind::Snack
    }

    #[must_use]
    pub fn is_tableware(&self) -> bool {
        self.kind == CardKind::Tableware
    }
}
