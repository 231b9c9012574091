//! Card records and validated cards.
//!
//! `CardRecord` mirrors what the external loader hands over: every field is
//! optional so a partially filled record still deserializes. Converting it
//! into a `Card` validates that the required fields are present.
//!
//! A card's identity is its `index` within its deck. Two cards are the same
//! entity iff their indices match.

use serde::{Deserialize, Serialize};

use super::element::Element;
use crate::core::{ReadingError, Result};

/// Stable identity of a card within its deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Immutable tarot card.
///
/// ## Example
///
/// ```
/// use arcana_graph::cards::{Card, CardIndex, Element};
///
/// let fool = Card::new(CardIndex::new(0), "The Fool", "Major")
///     .with_element(Element::Air);
///
/// assert_eq!(fool.element, Some(Element::Air));
/// assert!(fool.same_card(&Card::new(CardIndex::new(0), "Le Mat", "Major")));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,

    /// Category tag, stored verbatim.
    pub arcana: String,

    pub number: i32,
    pub period: String,
    pub description: String,

    /// Identity within the owning deck.
    pub index: CardIndex,

    pub upright_meaning: String,
    pub reversed_meaning: String,

    /// Empty when the source data has none.
    pub hebrew: String,

    /// Empty when the source data has none.
    pub symbol: String,

    /// `None` when the source element is empty or unrecognized.
    pub element: Option<Element>,
}

impl Card {
    /// Create a card with the identifying fields set and the rest empty.
    #[must_use]
    pub fn new(index: CardIndex, name: impl Into<String>, arcana: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arcana: arcana.into(),
            number: 0,
            period: String::new(),
            description: String::new(),
            index,
            upright_meaning: String::new(),
            reversed_meaning: String::new(),
            hebrew: String::new(),
            symbol: String::new(),
            element: None,
        }
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Set the card number (builder pattern).
    #[must_use]
    pub fn with_number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    /// Set both meanings (builder pattern).
    #[must_use]
    pub fn with_meanings(
        mut self,
        upright: impl Into<String>,
        reversed: impl Into<String>,
    ) -> Self {
        self.upright_meaning = upright.into();
        self.reversed_meaning = reversed.into();
        self
    }

    /// Whether `other` is the same entity (same deck index).
    #[must_use]
    pub fn same_card(&self, other: &Card) -> bool {
        self.index == other.index
    }
}

/// Card data as supplied by the catalog loader.
///
/// Accepts both snake_case keys and the camelCase meaning keys used by the
/// card data files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    pub name: Option<String>,
    pub arcana: Option<String>,
    pub number: Option<i32>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub index: Option<u32>,
    #[serde(alias = "meaningsUpright")]
    pub upright_meaning: Option<String>,
    #[serde(alias = "meaningsReversed")]
    pub reversed_meaning: Option<String>,
    pub hebrew: Option<String>,
    pub symbol: Option<String>,
    pub element: Option<String>,
}

impl TryFrom<CardRecord> for Card {
    type Error = ReadingError;

    fn try_from(record: CardRecord) -> Result<Self> {
        const ENTITY: &str = "card";
        let required = |value: Option<String>, field: &'static str| {
            value.ok_or(ReadingError::missing(ENTITY, field))
        };

        Ok(Card {
            name: required(record.name, "name")?,
            arcana: required(record.arcana, "arcana")?,
            number: record.number.ok_or(ReadingError::missing(ENTITY, "number"))?,
            period: required(record.period, "period")?,
            description: required(record.description, "description")?,
            index: record
                .index
                .map(CardIndex)
                .ok_or(ReadingError::missing(ENTITY, "index"))?,
            upright_meaning: required(record.upright_meaning, "upright_meaning")?,
            reversed_meaning: required(record.reversed_meaning, "reversed_meaning")?,
            hebrew: record.hebrew.unwrap_or_default(),
            symbol: record.symbol.unwrap_or_default(),
            element: record.element.as_deref().and_then(Element::parse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> CardRecord {
        CardRecord {
            name: Some("The Magician".to_string()),
            arcana: Some("Major Arcana".to_string()),
            number: Some(1),
            period: Some("Renaissance".to_string()),
            description: Some("A figure at a table".to_string()),
            index: Some(1),
            upright_meaning: Some("Skill".to_string()),
            reversed_meaning: Some("Trickery".to_string()),
            hebrew: Some("Beth".to_string()),
            symbol: Some("Mercury".to_string()),
            element: Some("Air".to_string()),
        }
    }

    #[test]
    fn test_card_index() {
        let id = CardIndex::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardIndex::new(3), "The Empress", "Major")
            .with_number(3)
            .with_element(Element::Earth)
            .with_meanings("Abundance", "Dependence");

        assert_eq!(card.number, 3);
        assert_eq!(card.element, Some(Element::Earth));
        assert_eq!(card.upright_meaning, "Abundance");
        assert_eq!(card.reversed_meaning, "Dependence");
        assert!(card.hebrew.is_empty());
    }

    #[test]
    fn test_identity_is_index() {
        let a = Card::new(CardIndex::new(1), "A", "Major");
        let b = Card::new(CardIndex::new(1), "B", "Minor");
        let c = Card::new(CardIndex::new(2), "A", "Major");

        assert!(a.same_card(&b));
        assert!(!a.same_card(&c));
    }

    #[test]
    fn test_record_conversion() {
        let card = Card::try_from(full_record()).unwrap();

        assert_eq!(card.name, "The Magician");
        assert_eq!(card.index, CardIndex::new(1));
        assert_eq!(card.hebrew, "Beth");
        assert_eq!(card.element, Some(Element::Air));
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let record = CardRecord {
            hebrew: None,
            symbol: None,
            element: None,
            ..full_record()
        };
        let card = Card::try_from(record).unwrap();

        assert_eq!(card.hebrew, "");
        assert_eq!(card.symbol, "");
        assert_eq!(card.element, None);
    }

    #[test]
    fn test_unknown_element_is_none() {
        let record = CardRecord {
            element: Some("Spirit".to_string()),
            ..full_record()
        };
        assert_eq!(Card::try_from(record).unwrap().element, None);
    }

    #[test]
    fn test_missing_required_field() {
        let record = CardRecord {
            index: None,
            ..full_record()
        };
        assert_eq!(
            Card::try_from(record),
            Err(ReadingError::missing("card", "index"))
        );

        let record = CardRecord {
            reversed_meaning: None,
            ..full_record()
        };
        assert_eq!(
            Card::try_from(record),
            Err(ReadingError::missing("card", "reversed_meaning"))
        );
    }

    #[test]
    fn test_record_deserializes_camel_case_meanings() {
        let json = r#"{
            "name": "The Fool",
            "arcana": "Major Arcana",
            "number": 0,
            "period": "Medieval",
            "description": "A traveller",
            "index": 0,
            "meaningsUpright": "Beginnings",
            "meaningsReversed": "Recklessness",
            "element": "Air"
        }"#;

        let record: CardRecord = serde_json::from_str(json).unwrap();
        let card = Card::try_from(record).unwrap();

        assert_eq!(card.upright_meaning, "Beginnings");
        assert_eq!(card.reversed_meaning, "Recklessness");
        assert_eq!(card.symbol, "");
    }
}
