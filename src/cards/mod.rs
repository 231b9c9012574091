//! Card system: cards, elements, decks, game modes, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card data, identified by `CardIndex` within its deck
//! - `Element`: Classical element carried by a card, if any
//! - `CompatibilityTable`: Which elements harmonize
//! - `Deck`: Named card list
//! - `GameMode`: A spread and the card count it calls for
//! - `CardCatalog`: All decks and modes, with at most one of each active
//!
//! Loader-facing `*Record` types have every field optional; converting them
//! validates required fields.

pub mod card;
pub mod catalog;
pub mod deck;
pub mod element;
pub mod mode;

pub use card::{Card, CardIndex, CardRecord};
pub use catalog::CardCatalog;
pub use deck::{Deck, DeckLoad, DeckRecord, RejectedRecord};
pub use element::{CompatibilityTable, Element};
pub use mode::{GameMode, GameModeRecord};
