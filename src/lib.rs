//! # arcana-graph
//!
//! Card-relationship graphs for tarot readings, with weights modulated by
//! elemental affinity, the lunar phase, and the solar sign.
//!
//! ## Design Principles
//!
//! 1. **Borrowed Cards**: The catalog owns every card. Draws and graphs hold
//!    references, so a reading never copies card data.
//!
//! 2. **Deterministic When Asked**: Shuffles use a seedable ChaCha RNG and
//!    edges are traversed in insertion order. A seeded reading always prints
//!    the same way.
//!
//! 3. **Explicit Misses**: Absent edges, nodes, and lunar events are
//!    `Option`s. Malformed external records are `ReadingError`s, and batch
//!    loads report the records they skipped.
//!
//! ## Pipeline
//!
//! catalog → draw → chain graph → resolve astrology → modulate
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `cards`: Cards, elements, decks, game modes, catalog
//! - `draw`: Card selection and shuffling
//! - `graph`: Arena-backed relationship graph
//! - `astrology`: Solar sign and lunar phase lookups
//! - `modulation`: Weight modifier chain
//! - `reading`: The end-to-end reading pipeline

pub mod core;
pub mod cards;
pub mod draw;
pub mod graph;
pub mod astrology;
pub mod modulation;
pub mod reading;

// Re-export commonly used types
pub use crate::core::{
    DrawPolicy, ModulationConfig, ReadingConfig, ReadingError, ReadingRng, Result,
};

pub use crate::cards::{
    Card, CardCatalog, CardIndex, CardRecord, CompatibilityTable, Deck, DeckLoad, DeckRecord,
    Element, GameMode, GameModeRecord, RejectedRecord,
};

pub use crate::draw::DrawSelector;

pub use crate::graph::{Edge, EdgeEntry, EdgeSite, EdgeSnapshot, Node, NodeId, RelationshipGraph};

pub use crate::astrology::{
    current_solar_sign, solar_sign, AstrologyContext, LunarEvent, LunarEventRecord, LunarTable,
    LunarTableLoad, ZodiacSign,
};

pub use crate::modulation::{
    EdgeModulation, ElementalModifier, LunarModifier, ModulationEngine, PassStep, SolarModifier,
    WeightModifier,
};

pub use crate::reading::{Reader, Reading, ReadingSummary};
