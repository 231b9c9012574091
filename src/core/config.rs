//! Reading configuration.
//!
//! - `DrawPolicy`: how many of the deck's cards enter a reading
//! - `ModulationConfig`: factors and trigger labels for the modifier chain
//! - `ReadingConfig`: combines both with the seed and the base weight step
//!
//! Defaults reproduce the stock behavior exactly, so `ReadingConfig::default()`
//! is what an interactive session uses.

use serde::{Deserialize, Serialize};

/// Which cards of a deck a draw takes before shuffling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Take every card in the deck. Downstream sizing is the caller's job.
    #[default]
    WholeDeck,
    /// Keep only the first `required_card_count` cards (deck order), then
    /// shuffle. Has no effect when no game mode is supplied.
    TruncateToMode,
}

/// Factors applied by the modulation passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModulationConfig {
    /// Elemental pass factor when source and target elements harmonize.
    pub compatible_factor: f64,

    /// Elemental pass factor otherwise (including unknown elements).
    pub incompatible_factor: f64,

    /// Lunar pass factor when the resolved phase equals `full_moon_label`.
    pub full_moon_factor: f64,

    /// Lunar pass factor for any other phase, or when no phase was found.
    pub other_phase_factor: f64,

    /// Solar pass factor when the resolved sign equals `aries_label`.
    pub aries_factor: f64,

    /// Solar pass factor for any other sign.
    pub other_sign_factor: f64,

    /// Phase name that triggers `full_moon_factor`.
    pub full_moon_label: String,

    /// Sign name that triggers `aries_factor`.
    pub aries_label: String,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            compatible_factor: 0.9,
            incompatible_factor: 1.1,
            full_moon_factor: 0.8,
            other_phase_factor: 1.2,
            aries_factor: 0.85,
            other_sign_factor: 1.15,
            full_moon_label: "Full Moon".to_string(),
            aries_label: "Aries".to_string(),
        }
    }
}

impl ModulationConfig {
    /// Set the elemental factors.
    #[must_use]
    pub fn with_elemental(mut self, compatible: f64, incompatible: f64) -> Self {
        self.compatible_factor = compatible;
        self.incompatible_factor = incompatible;
        self
    }

    /// Set the lunar factors.
    #[must_use]
    pub fn with_lunar(mut self, full_moon: f64, other: f64) -> Self {
        self.full_moon_factor = full_moon;
        self.other_phase_factor = other;
        self
    }

    /// Set the solar factors.
    #[must_use]
    pub fn with_solar(mut self, aries: f64, other: f64) -> Self {
        self.aries_factor = aries;
        self.other_sign_factor = other;
        self
    }
}

/// Configuration for one reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Shuffle seed. `None` seeds from the wall clock.
    pub seed: Option<u64>,

    /// How cards are taken from the deck.
    pub draw_policy: DrawPolicy,

    /// Initial weight of the edge leaving position `i` is `step * (i + 1)`.
    pub base_weight_step: f64,

    /// Modifier chain factors.
    pub modulation: ModulationConfig,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_policy: DrawPolicy::WholeDeck,
            base_weight_step: 0.5,
            modulation: ModulationConfig::default(),
        }
    }
}

impl ReadingConfig {
    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the draw policy.
    #[must_use]
    pub fn with_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }

    /// Set the base weight step.
    #[must_use]
    pub fn with_weight_step(mut self, step: f64) -> Self {
        self.base_weight_step = step;
        self
    }

    /// Replace the modulation factors.
    #[must_use]
    pub fn with_modulation(mut self, modulation: ModulationConfig) -> Self {
        self.modulation = modulation;
        self
    }
}
