//! Decks: named, ordered card lists.
//!
//! A deck owns its cards. Card order is the order the loader supplied, which
//! is also the order `DrawPolicy::TruncateToMode` truncates in.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::card::{Card, CardIndex, CardRecord};
use super::element::Element;
use crate::core::{ReadingError, Result};

/// A tarot deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub description: String,
    pub era: String,
    pub difficulty: String,

    /// At most one deck in a catalog is active.
    pub active: bool,

    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty, inactive deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            era: String::new(),
            difficulty: String::new(),
            active: false,
            cards: Vec::new(),
        }
    }

    /// Add cards (builder pattern).
    ///
    /// Cards whose index is already present are dropped with a warning.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        for card in cards {
            let name = card.name.clone();
            if let Err(error) = self.push(card) {
                warn!(deck = %self.name, card = %name, %error, "dropping card");
            }
        }
        self
    }

    /// Append a card.
    ///
    /// Fails with `DuplicateCard` if a card with the same index exists.
    pub fn push(&mut self, card: Card) -> Result<()> {
        if self.card(card.index).is_some() {
            return Err(ReadingError::DuplicateCard { index: card.index.raw() });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by its index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.iter().find(|c| c.index == index)
    }

    /// Cards whose arcana tag equals `arcana` (case-insensitive).
    pub fn cards_of_arcana<'a>(&'a self, arcana: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards
            .iter()
            .filter(move |c| c.arcana.eq_ignore_ascii_case(arcana))
    }

    /// Cards of the given element. `None` selects cards with no known element.
    pub fn cards_of_element(&self, element: Option<Element>) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.element == element)
    }

    /// Build a deck from loader records.
    ///
    /// A malformed deck record fails the whole call. Malformed or duplicate
    /// card records are skipped and reported in `DeckLoad::rejected`.
    pub fn from_records(
        record: DeckRecord,
        cards: impl IntoIterator<Item = CardRecord>,
    ) -> Result<DeckLoad> {
        let mut deck = Deck::try_from(record)?;
        let mut rejected = Vec::new();
        let mut seen = FxHashSet::default();

        for (position, card_record) in cards.into_iter().enumerate() {
            let outcome = Card::try_from(card_record).and_then(|card| {
                if seen.insert(card.index) {
                    Ok(card)
                } else {
                    Err(ReadingError::DuplicateCard { index: card.index.raw() })
                }
            });

            match outcome {
                Ok(card) => deck.cards.push(card),
                Err(error) => {
                    warn!(deck = %deck.name, position, %error, "skipping card record");
                    rejected.push(RejectedRecord { position, error });
                }
            }
        }

        debug!(deck = %deck.name, cards = deck.size(), rejected = rejected.len(), "deck loaded");
        Ok(DeckLoad { deck, rejected })
    }
}

/// Deck metadata as supplied by the catalog loader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub era: Option<String>,
    pub difficulty: Option<String>,
    pub active: Option<bool>,
}

impl TryFrom<DeckRecord> for Deck {
    type Error = ReadingError;

    fn try_from(record: DeckRecord) -> Result<Self> {
        Ok(Deck {
            name: record.name.ok_or(ReadingError::missing("deck", "name"))?,
            description: record.description.unwrap_or_default(),
            era: record.era.unwrap_or_default(),
            difficulty: record.difficulty.unwrap_or_default(),
            active: record.active.unwrap_or(false),
            cards: Vec::new(),
        })
    }
}

/// A record the loader could not turn into a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the record in the input sequence.
    pub position: usize,
    pub error: ReadingError,
}

/// Result of `Deck::from_records`.
#[derive(Clone, Debug)]
pub struct DeckLoad {
    pub deck: Deck,
    pub rejected: Vec<RejectedRecord>,
}
