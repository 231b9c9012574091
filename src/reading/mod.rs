//! End-to-end reading pipeline.
//!
//! A reading draws from a deck, chains the drawn cards into a
//! `RelationshipGraph`, resolves the astrology for the reading date, and
//! runs the modulation chain over the graph. The result borrows its cards
//! from the deck, which outlives the reading.
//!
//! ## Usage
//!
//! ```rust
//! use arcana_graph::astrology::LunarTable;
//! use arcana_graph::cards::{Card, CardCatalog, CardIndex, Deck, GameMode};
//! use arcana_graph::core::ReadingConfig;
//! use arcana_graph::reading::Reader;
//! use chrono::NaiveDate;
//!
//! let mut deck = Deck::new("Rider-Waite").with_cards(
//!     (0..22).map(|i| Card::new(CardIndex::new(i), format!("Trump {}", i), "Major")),
//! );
//! deck.active = true;
//!
//! let mut catalog = CardCatalog::new();
//! catalog.add_deck(deck).unwrap();
//! catalog.add_mode(GameMode::celtic_cross()).unwrap();
//! catalog.activate_mode("Celtic Cross").unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
//! let reader = Reader::new(ReadingConfig::default().with_seed(42));
//! let reading = reader.perform(&catalog, date, &LunarTable::new()).unwrap();
//!
//! assert_eq!(reading.cards.len(), 22);
//! assert_eq!(reading.graph.edge_count(), 21);
//! assert_eq!(reading.astrology.lunar_phase_label(), "not found");
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::astrology::{AstrologyContext, LunarTable};
use crate::cards::{Card, CardCatalog, Deck, GameMode};
use crate::core::{ReadingConfig, ReadingError, ReadingRng, Result};
use crate::draw::DrawSelector;
use crate::graph::{EdgeSnapshot, RelationshipGraph};
use crate::modulation::{EdgeModulation, ModulationEngine};

/// Runs readings with a fixed configuration.
#[derive(Debug)]
pub struct Reader {
    config: ReadingConfig,
    selector: DrawSelector,
    engine: ModulationEngine,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new(ReadingConfig::default())
    }
}

impl Reader {
    /// Create a reader with the stock modifier chain.
    #[must_use]
    pub fn new(config: ReadingConfig) -> Self {
        let engine = ModulationEngine::standard(&config.modulation);
        Self {
            selector: DrawSelector::new(config.draw_policy),
            engine,
            config,
        }
    }

    /// Replace the modifier chain.
    #[must_use]
    pub fn with_engine(mut self, engine: ModulationEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The reader's configuration.
    #[must_use]
    pub fn config(&self) -> &ReadingConfig {
        &self.config
    }

    /// Read from the catalog's active deck and active mode.
    ///
    /// Fails with `NoActiveDeck` or `NoActiveMode` when either is missing.
    pub fn perform<'c>(
        &self,
        catalog: &'c CardCatalog,
        date: NaiveDate,
        lunar_table: &LunarTable,
    ) -> Result<Reading<'c>> {
        let deck = catalog.active_deck().ok_or(ReadingError::NoActiveDeck)?;
        let mode = catalog.active_mode().ok_or(ReadingError::NoActiveMode)?;
        Ok(self.perform_with(deck, Some(mode), date, lunar_table))
    }

    /// Read from an explicit deck and optional mode.
    #[must_use]
    pub fn perform_with<'a>(
        &self,
        deck: &'a Deck,
        mode: Option<&GameMode>,
        date: NaiveDate,
        lunar_table: &LunarTable,
    ) -> Reading<'a> {
        let mut rng = match self.config.seed {
            Some(seed) => ReadingRng::new(seed),
            None => ReadingRng::from_clock(),
        };
        let cards = self.selector.draw(deck, mode, &mut rng);
        let astrology = AstrologyContext::resolve(date, lunar_table);

        let mut reading = self.read_sequence(cards, astrology);
        reading.seed = Some(rng.seed());
        reading.required_card_count = mode.map(|m| m.required_card_count);
        reading
    }

    /// Build and modulate the graph for an already ordered sequence.
    ///
    /// No drawing or shuffling happens; `seed` on the result is `None`.
    #[must_use]
    pub fn read_sequence<'a>(
        &self,
        cards: Vec<&'a Card>,
        astrology: AstrologyContext,
    ) -> Reading<'a> {
        let mut graph = RelationshipGraph::chain(&cards, self.config.base_weight_step);
        let trace = self.engine.modulate(&mut graph, &astrology);

        debug!(
            cards = cards.len(),
            edges = graph.edge_count(),
            sign = %astrology.solar_sign,
            phase = astrology.lunar_phase_label(),
            "reading complete"
        );

        Reading {
            cards,
            graph,
            astrology,
            seed: None,
            required_card_count: None,
            trace,
        }
    }
}

/// A completed reading.
#[derive(Clone, Debug)]
pub struct Reading<'a> {
    /// Drawn cards in shuffled order.
    pub cards: Vec<&'a Card>,

    /// Modulated relationship graph.
    pub graph: RelationshipGraph<'a>,

    /// Factors the weights were modulated with.
    pub astrology: AstrologyContext,

    /// Shuffle seed, when the reader drew the cards.
    pub seed: Option<u64>,

    /// Card count the game mode asked for, if a mode was given.
    pub required_card_count: Option<usize>,

    /// Per-edge modulation trace, in traversal order.
    pub trace: Vec<EdgeModulation>,
}

impl Reading<'_> {
    /// Owned, serializable view for presentation code.
    #[must_use]
    pub fn summary(&self) -> ReadingSummary {
        ReadingSummary {
            seed: self.seed,
            solar_sign: self.astrology.solar_sign_label().to_string(),
            lunar_phase: self.astrology.lunar_phase_label().to_string(),
            cards: self.cards.iter().map(|c| c.name.clone()).collect(),
            edges: self.graph.snapshot(),
        }
    }
}

impl fmt::Display for Reading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sun: {}", self.astrology.solar_sign_label())?;
        writeln!(f, "Moon: {}", self.astrology.lunar_phase_label())?;
        write!(f, "{}", self.graph)
    }
}

/// Serializable summary of a reading.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReadingSummary {
    pub seed: Option<u64>,
    pub solar_sign: String,
    pub lunar_phase: String,
    pub cards: Vec<String>,
    pub edges: Vec<EdgeSnapshot>,
}
