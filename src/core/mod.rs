//! Core engine types: errors, the shuffle RNG, and reading configuration.
//!
//! Everything here is independent of cards and graphs so the other modules
//! can share it.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DrawPolicy, ModulationConfig, ReadingConfig};
pub use error::{ReadingError, Result};
pub use rng::ReadingRng;
