//! Game modes (spreads).
//!
//! A mode names a spread and how many cards it calls for. The draw may or
//! may not honor that count depending on the configured `DrawPolicy`.

use serde::{Deserialize, Serialize};

use crate::core::{ReadingError, Result};

/// A spread the player can choose.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    pub name: String,
    pub description: String,

    /// Number of cards the spread lays out.
    pub required_card_count: usize,

    /// At most one mode in a catalog is active.
    pub active: bool,
}

impl GameMode {
    /// Create an inactive mode.
    #[must_use]
    pub fn new(name: impl Into<String>, required_card_count: usize) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required_card_count,
            active: false,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The ten-card Celtic Cross.
    #[must_use]
    pub fn celtic_cross() -> Self {
        Self::new("Celtic Cross", 10)
            .with_description("Ten cards covering situation, obstacles, past, future and outcome")
    }

    /// The ten-card Tree of Life, one card per sephirah.
    #[must_use]
    pub fn tree_of_life() -> Self {
        Self::new("Tree of Life", 10)
            .with_description("Ten cards laid on the sephirot of the Tree of Life")
    }
}

/// Game mode data as supplied by the catalog loader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameModeRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "noOfCards")]
    pub required_card_count: Option<usize>,
    pub active: Option<bool>,
}

impl TryFrom<GameModeRecord> for GameMode {
    type Error = ReadingError;

    fn try_from(record: GameModeRecord) -> Result<Self> {
        Ok(GameMode {
            name: record.name.ok_or(ReadingError::missing("game mode", "name"))?,
            description: record.description.unwrap_or_default(),
            required_card_count: record
                .required_card_count
                .ok_or(ReadingError::missing("game mode", "required_card_count"))?,
            active: record.active.unwrap_or(false),
        })
    }
}
