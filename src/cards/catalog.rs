//! Authored card content.
//!
//! The `CardCatalog` holds every card that exists in a game, in authored
//! order. It validates content as it is registered and partitions it
//! into the three starting piles:
//!
//! - snacks
//! - level-1 tableware (the draw pile)
//! - level-2/3 tableware (the reward pile)

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::attributes::{AttrSet, Attribute, Attributes, Color, Shape, Temperature};
use super::deck::Deck;
use super::definition::{Card, CardId, CardKind};

/// Highest tableware level.
pub const MAX_TABLEWARE_LEVEL: u8 = 3;

/// Invalid authored content.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card {0} is registered twice")]
    DuplicateId(CardId),

    #[error("snack {id} has level {level}, snacks are always level 1")]
    SnackLevel { id: CardId, level: u8 },

    #[error("tableware {id} has level {level}, expected 1-3")]
    TablewareLevel { id: CardId, level: u8 },

    #[error("malformed card content: {0}")]
    Json(#[from] serde_json::Error),
}

/// The three unshuffled piles a game starts from.
#[derive(Clone, Debug, Default)]
pub struct StartingDecks {
    pub snacks: Deck,
    pub tableware: Deck,
    pub rewards: Deck,
}

/// Registry of every card in the game.
///
/// ## Example
///
/// ```
/// use jade_banquet::cards::{Card, CardCatalog, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::snack("snack-01", "Warm Red Bun")).unwrap();
///
/// assert!(catalog.contains(&CardId::new("snack-01")));
/// assert!(catalog.register(Card::snack("snack-01", "Again")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a card.
    pub fn register(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        match card.kind {
            CardKind::Snack if card.level != 1 => {
                return Err(CatalogError::SnackLevel {
                    id: card.id,
                    level: card.level,
                });
            }
            CardKind::Tableware if !(1..=MAX_TABLEWARE_LEVEL).contains(&card.level) => {
                return Err(CatalogError::TablewareLevel {
                    id: card.id,
                    level: card.level,
                });
            }
            _ => {}
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Load content from a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Serialize content as a JSON array of cards.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.cards)?)
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Partition content into snack, level-1 and reward piles.
    ///
    /// Piles keep authored order; shuffling is the caller's job.
    #[must_use]
    pub fn starting_decks(&self) -> StartingDecks {
        let mut decks = StartingDecks::default();
        for card in &self.cards {
            let pile = match (card.kind, card.level) {
                (CardKind::Snack, _) => &mut decks.snacks,
                (CardKind::Tableware, 1) => &mut decks.tableware,
                (CardKind::Tableware, _) => &mut decks.rewards,
            };
            pile.push(card.clone());
        }
        decks
    }

    /// The built-in content set.
    ///
    /// - 24 snacks: every single-valued combination, plus six two-color snacks
    /// - 18 level-1 cups, trays and dishes: every single-valued combination
    /// - 9 level-2 bowls: two colors, one shape, one temperature
    /// - 3 level-3 teapots: two colors, two shapes, both temperatures
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::new();

        for &temperature in Temperature::ALL {
            for &color in Color::ALL {
                for &shape in Shape::ALL {
                    let n = cards.len() + 1;
                    cards.push(
                        Card::snack(
                            format!("snack-{n:02}"),
                            format!("{} {} {}", temp_name(temperature), color_name(color), snack_noun(shape)),
                        )
                        .with_attributes(Attributes::single(color, shape, temperature)),
                    );
                }
            }
        }
        for (i, &color) in Color::ALL.iter().enumerate() {
            let shape = Shape::ALL[i];
            for &temperature in Temperature::ALL {
                let n = cards.len() + 1;
                let partner = next_value(color);
                cards.push(
                    Card::snack(
                        format!("snack-{n:02}"),
                        format!(
                            "{} {}-{} {}",
                            temp_name(temperature),
                            color_name(color),
                            color_name(partner),
                            snack_noun(shape)
                        ),
                    )
                    .with_attributes(Attributes {
                        colors: [color, partner].into_iter().collect(),
                        shapes: AttrSet::single(shape),
                        temperatures: AttrSet::single(temperature),
                    }),
                );
            }
        }

        let mut n = 0;
        for &temperature in Temperature::ALL {
            for &color in Color::ALL {
                for &shape in Shape::ALL {
                    n += 1;
                    cards.push(
                        Card::tableware(
                            format!("ware1-{n:02}"),
                            format!("{} {} {}", temp_name(temperature), color_name(color), ware_noun(shape)),
                            1,
                        )
                        .with_attributes(Attributes::single(color, shape, temperature)),
                    );
                }
            }
        }

        let mut n = 0;
        for (ci, &color) in Color::ALL.iter().enumerate() {
            for (si, &shape) in Shape::ALL.iter().enumerate() {
                n += 1;
                let partner = next_value(color);
                let temperature = Temperature::ALL[(ci + si) % Temperature::ALL.len()];
                cards.push(
                    Card::tableware(
                        format!("ware2-{n:02}"),
                        format!("{}-{} {} Bowl", color_name(color), color_name(partner), shape_adjective(shape)),
                        2,
                    )
                    .with_attributes(Attributes {
                        colors: [color, partner].into_iter().collect(),
                        shapes: AttrSet::single(shape),
                        temperatures: AttrSet::single(temperature),
                    }),
                );
            }
        }

        for (i, &color) in Color::ALL.iter().enumerate() {
            let shape = Shape::ALL[i];
            let partner = next_value(color);
            cards.push(
                Card::tableware(
                    format!("ware3-{:02}", i + 1),
                    format!("{}-{} Teapot", color_name(color), color_name(partner)),
                    3,
                )
                .with_attributes(Attributes {
                    colors: [color, partner].into_iter().collect(),
                    shapes: [shape, next_value(shape)].into_iter().collect(),
                    temperatures: Temperature::ALL.iter().copied().collect(),
                })
                .with_description("Pours for the whole table"),
            );
        }

        let mut catalog = Self::new();
        for card in cards {
            // Generated ids are unique and levels in range.
            if let Err(err) = catalog.register(card) {
                unreachable!("standard catalog is malformed: {err}");
            }
        }
        catalog
    }
}

fn next_value<A: Attribute>(value: A) -> A {
    A::ALL[(value.ordinal() as usize + 1) % A::ALL.len()]
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Green => "Green",
        Color::Blue => "Blue",
    }
}

fn temp_name(temperature: Temperature) -> &'static str {
    match temperature {
        Temperature::Warm => "Warm",
        Temperature::Cold => "Cold",
    }
}

fn snack_noun(shape: Shape) -> &'static str {
    match shape {
        Shape::Circle => "Bun",
        Shape::Square => "Cake",
        Shape::Triangle => "Dumpling",
    }
}

fn ware_noun(shape: Shape) -> &'static str {
    match shape {
        Shape::Circle => "Cup",
        Shape::Square => "Tray",
        Shape::Triangle => "Dish",
    }
}

fn shape_adjective(shape: Shape) -> &'static str {
    match shape {
        Shape::Circle => "Round",
        Shape::Square => "Square",
        Shape::Triangle => "Pointed",
    }
}
