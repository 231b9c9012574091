//! Edge weight modulation.
//!
//! - `WeightModifier`: one multiplicative pass (trait-based, so chains can
//!   be reordered or extended)
//! - `ElementalModifier`, `LunarModifier`, `SolarModifier`: the stock passes
//! - `ModulationEngine`: applies a chain in order and records a trace

pub mod engine;
pub mod modifier;

pub use engine::{EdgeModulation, ModulationEngine, PassStep};
pub use modifier::{ElementalModifier, LunarModifier, SolarModifier, WeightModifier};
