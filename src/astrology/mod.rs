//! Calendar-derived environmental factors: solar sign and lunar phase.
//!
//! Both are deterministic lookups. The solar sign comes from fixed
//! (month, day) ranges; the lunar phase comes from a pre-tabulated event
//! table supplied by the caller.

pub mod context;
pub mod lunar;
pub mod solar;

pub use context::{AstrologyContext, NOT_FOUND};
pub use lunar::{
    event_on_or_before, lunar_phase_on_or_before, LunarEvent, LunarEventRecord, LunarTable,
    LunarTableLoad,
};
pub use solar::{current_solar_sign, solar_sign, ZodiacSign};
