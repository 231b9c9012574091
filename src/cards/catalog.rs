//! Card catalog: every deck and game mode known to a session.
//!
//! The catalog is loaded once per process and outlives readings. It keeps
//! insertion order for listing and a name index for lookup, and guarantees
//! that at most one deck and at most one mode are active.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::card::CardRecord;
use super::deck::{Deck, DeckLoad, DeckRecord, RejectedRecord};
use super::mode::GameMode;
use crate::core::{ReadingError, Result};

/// Registry of decks and game modes.
///
/// ## Example
///
/// ```
/// use arcana_graph::cards::{CardCatalog, Deck, GameMode};
///
/// let mut catalog = CardCatalog::new();
/// catalog.add_deck(Deck::new("Rider-Waite")).unwrap();
/// catalog.add_mode(GameMode::celtic_cross()).unwrap();
///
/// catalog.activate_deck("Rider-Waite").unwrap();
/// assert_eq!(catalog.active_deck().unwrap().name, "Rider-Waite");
/// assert!(catalog.active_mode().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    decks: Vec<Deck>,
    deck_names: FxHashMap<String, usize>,
    modes: Vec<GameMode>,
    mode_names: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a deck.
    ///
    /// If the deck arrives already marked active it becomes the only active
    /// deck.
    pub fn add_deck(&mut self, deck: Deck) -> Result<()> {
        if self.deck_names.contains_key(&deck.name) {
            return Err(ReadingError::DuplicateDeck { name: deck.name });
        }
        let slot = self.decks.len();
        let active = deck.active;
        self.deck_names.insert(deck.name.clone(), slot);
        self.decks.push(deck);
        if active {
            self.set_active_deck(slot);
        }
        Ok(())
    }

    /// Build a deck from loader records and register it.
    ///
    /// Returns the rejected card records; see `Deck::from_records`.
    pub fn load_deck(
        &mut self,
        record: DeckRecord,
        cards: impl IntoIterator<Item = CardRecord>,
    ) -> Result<Vec<RejectedRecord>> {
        let DeckLoad { deck, rejected } = Deck::from_records(record, cards)?;
        self.add_deck(deck)?;
        Ok(rejected)
    }

    /// Register a game mode.
    ///
    /// If the mode arrives already marked active it becomes the only active
    /// mode.
    pub fn add_mode(&mut self, mode: GameMode) -> Result<()> {
        if self.mode_names.contains_key(&mode.name) {
            return Err(ReadingError::DuplicateMode { name: mode.name });
        }
        let slot = self.modes.len();
        let active = mode.active;
        self.mode_names.insert(mode.name.clone(), slot);
        self.modes.push(mode);
        if active {
            self.set_active_mode(slot);
        }
        Ok(())
    }

    /// Get a deck by name.
    #[must_use]
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.deck_names.get(name).map(|&slot| &self.decks[slot])
    }

    /// Get a game mode by name.
    #[must_use]
    pub fn mode(&self, name: &str) -> Option<&GameMode> {
        self.mode_names.get(name).map(|&slot| &self.modes[slot])
    }

    /// Make `name` the only active deck.
    pub fn activate_deck(&mut self, name: &str) -> Result<()> {
        let slot = *self
            .deck_names
            .get(name)
            .ok_or_else(|| ReadingError::UnknownDeck { name: name.to_string() })?;
        self.set_active_deck(slot);
        debug!(deck = name, "deck activated");
        Ok(())
    }

    /// Make `name` the only active game mode.
    pub fn activate_mode(&mut self, name: &str) -> Result<()> {
        let slot = *self
            .mode_names
            .get(name)
            .ok_or_else(|| ReadingError::UnknownMode { name: name.to_string() })?;
        self.set_active_mode(slot);
        debug!(mode = name, "game mode activated");
        Ok(())
    }

    /// The active deck, if any.
    #[must_use]
    pub fn active_deck(&self) -> Option<&Deck> {
        self.decks.iter().find(|d| d.active)
    }

    /// The active game mode, if any.
    #[must_use]
    pub fn active_mode(&self) -> Option<&GameMode> {
        self.modes.iter().find(|m| m.active)
    }

    /// Iterate over decks in registration order.
    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter()
    }

    /// Iterate over game modes in registration order.
    pub fn modes(&self) -> impl Iterator<Item = &GameMode> {
        self.modes.iter()
    }

    /// Number of registered decks.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// Number of registered modes.
    #[must_use]
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    fn set_active_deck(&mut self, slot: usize) {
        for (i, deck) in self.decks.iter_mut().enumerate() {
            deck.active = i == slot;
        }
    }

    fn set_active_mode(&mut self, slot: usize) {
        for (i, mode) in self.modes.iter_mut().enumerate() {
            mode.active = i == slot;
        }
    }
}
