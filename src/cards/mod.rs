//! Card system: attributes, cards, decks and authored content.
//!
//! ## Key Types
//!
//! - `Card`: an immutable physical card, owned by exactly one container
//! - `Attributes`: color, shape and temperature sets used for pairing
//! - `Deck`: an unseen draw pile (top = end)
//! - `CardCatalog`: validated authored content and deck partitioning

pub mod attributes;
pub mod catalog;
pub mod deck;
pub mod definition;

pub use attributes::{AttrSet, Attribute, Attributes, Color, Shape, Temperature};
pub use catalog::{CardCatalog, CatalogError, StartingDecks, MAX_TABLEWARE_LEVEL};
pub use deck::Deck;
pub use definition::{Card, CardId, CardKind};
