//! Error taxonomy for the reading engine.
//!
//! Lookups that can legitimately miss (edges, nodes, lunar events) return
//! `Option` and never appear here. `ReadingError` covers malformed external
//! records and catalog misuse. Loading a batch of records never aborts on a
//! single bad record: callers receive the rejected records alongside what
//! did load.

use thiserror::Error;

/// Errors produced while validating records or driving a reading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// A required field was absent from an external record.
    #[error("{entity} record is missing required field `{field}`")]
    MissingField {
        /// Kind of record ("card", "deck", "game mode").
        entity: &'static str,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A lunar event date was not in `YYYY-MM-DD` form.
    #[error("invalid lunar event date: {value:?}")]
    InvalidDate {
        /// The offending date text.
        value: String,
    },

    /// A lunar table year key was not an integer.
    #[error("invalid lunar table year key: {value:?}")]
    InvalidYear {
        /// The offending key.
        value: String,
    },

    /// Two cards in one deck share an index.
    #[error("card index {index} appears more than once in the deck")]
    DuplicateCard {
        /// The repeated index.
        index: u32,
    },

    /// A deck with this name is already in the catalog.
    #[error("deck {name:?} is already registered")]
    DuplicateDeck {
        /// Deck name.
        name: String,
    },

    /// A game mode with this name is already in the catalog.
    #[error("game mode {name:?} is already registered")]
    DuplicateMode {
        /// Mode name.
        name: String,
    },

    /// No deck with this name exists.
    #[error("unknown deck {name:?}")]
    UnknownDeck {
        /// Deck name.
        name: String,
    },

    /// No game mode with this name exists.
    #[error("unknown game mode {name:?}")]
    UnknownMode {
        /// Mode name.
        name: String,
    },

    /// A reading was requested but no deck is active.
    #[error("no deck is active")]
    NoActiveDeck,

    /// A reading was requested but no game mode is active.
    #[error("no game mode is active")]
    NoActiveMode,
}

impl ReadingError {
    /// Shorthand for a missing-field error.
    #[must_use]
    pub const fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReadingError>;
