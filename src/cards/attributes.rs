//! Card attributes: colors, shapes and temperatures.
//!
//! Each card carries one set per attribute family. Scoring only ever asks
//! how many values two sets share, so a set is stored as a bitmask and
//! overlap is a popcount.
//!
//! On the wire a set is a JSON array of lowercase names in canonical
//! order, e.g. `["red", "green"]`.

use std::fmt;
use std::marker::PhantomData;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value from one of the small, fixed attribute domains.
pub trait Attribute: Copy + Eq + fmt::Debug + 'static {
    /// Every value of the domain, in canonical order.
    const ALL: &'static [Self];

    /// Position of this value in [`Attribute::ALL`].
    fn ordinal(self) -> u8;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cold,
}

impl Attribute for Color {
    const ALL: &'static [Self] = &[Color::Red, Color::Green, Color::Blue];

    fn ordinal(self) -> u8 {
        self as u8
    }
}

impl Attribute for Shape {
    const ALL: &'static [Self] = &[Shape::Circle, Shape::Square, Shape::Triangle];

    fn ordinal(self) -> u8 {
        self as u8
    }
}

impl Attribute for Temperature {
    const ALL: &'static [Self] = &[Temperature::Warm, Temperature::Cold];

    fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Set of values from one attribute domain.
///
/// ```
/// use jade_banquet::cards::{AttrSet, Color};
///
/// let plate: AttrSet<Color> = [Color::Red, Color::Blue].into_iter().collect();
/// let snack: AttrSet<Color> = [Color::Red, Color::Green].into_iter().collect();
/// assert_eq!(plate.overlap(snack), 1);
/// ```
pub struct AttrSet<A> {
    bits: u8,
    _domain: PhantomData<A>,
}

impl<A: Attribute> AttrSet<A> {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _domain: PhantomData,
        }
    }

    /// Set holding a single value.
    #[must_use]
    pub fn single(value: A) -> Self {
        let mut set = Self::empty();
        set.insert(value);
        set
    }

    /// Add a value. Adding a value twice has no effect.
    pub fn insert(&mut self, value: A) {
        self.bits |= 1 << value.ordinal();
    }

    #[must_use]
    pub fn contains(self, value: A) -> bool {
        self.bits & (1 << value.ordinal()) != 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of values present in both sets.
    #[must_use]
    pub fn overlap(self, other: Self) -> u32 {
        (self.bits & other.bits).count_ones()
    }

    /// Values in canonical order.
    pub fn iter(self) -> impl Iterator<Item = A> {
        A::ALL.iter().copied().filter(move |v| self.contains(*v))
    }
}

impl<A> Clone for AttrSet<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for AttrSet<A> {}

impl<A> PartialEq for AttrSet<A> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<A> Eq for AttrSet<A> {}

impl<A> std::hash::Hash for AttrSet<A> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<A: Attribute> Default for AttrSet<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Attribute> fmt::Debug for AttrSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<A: Attribute> FromIterator<A> for AttrSet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut set = Self::empty();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<A: Attribute + Serialize> Serialize for AttrSet<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Length up front: filtered iterators give no exact size hint.
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

impl<'de, A: Attribute + Deserialize<'de>> Deserialize<'de> for AttrSet<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<A>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

/// The three attribute sets a card carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub colors: AttrSet<Color>,
    pub shapes: AttrSet<Shape>,
    #[serde(rename = "temps")]
    pub temperatures: AttrSet<Temperature>,
}

impl Attributes {
    /// Attributes with exactly one value per family.
    #[must_use]
    pub fn single(color: Color, shape: Shape, temperature: Temperature) -> Self {
        Self {
            colors: AttrSet::single(color),
            shapes: AttrSet::single(shape),
            temperatures: AttrSet::single(temperature),
        }
    }

    /// Total number of attribute values across all families.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.colors.len() + self.shapes.len() + self.temperatures.len()
    }

    /// Number of values shared with `other`, family by family.
    #[must_use]
    pub fn overlap(&self, other: &Attributes) -> u32 {
        self.colors.overlap(other.colors)
            + self.shapes.overlap(other.shapes)
            + self.temperatures.overlap(other.temperatures)
    }
}
