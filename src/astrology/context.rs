//! Environmental factors resolved for a reading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lunar::LunarTable;
use super::solar::{current_solar_sign, ZodiacSign};

/// Label shown when no lunar event precedes the reading date.
pub const NOT_FOUND: &str = "not found";

/// Solar sign and lunar phase in effect for a reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrologyContext {
    pub solar_sign: ZodiacSign,

    /// `None` when the table has no qualifying event.
    pub lunar_phase: Option<String>,
}

impl AstrologyContext {
    /// Build a context from already known factors.
    #[must_use]
    pub fn new(solar_sign: ZodiacSign, lunar_phase: Option<String>) -> Self {
        Self {
            solar_sign,
            lunar_phase,
        }
    }

    /// Resolve both factors for `date`.
    #[must_use]
    pub fn resolve(date: NaiveDate, lunar_table: &LunarTable) -> Self {
        let solar_sign = current_solar_sign(date);
        let lunar_phase = lunar_table.phase_on_or_before(date).map(str::to_owned);

        debug!(%date, sign = %solar_sign, phase = ?lunar_phase, "astrology resolved");
        Self {
            solar_sign,
            lunar_phase,
        }
    }

    /// Sign name for display.
    #[must_use]
    pub fn solar_sign_label(&self) -> &'static str {
        self.solar_sign.name()
    }

    /// Phase name for display, or `"not found"`.
    #[must_use]
    pub fn lunar_phase_label(&self) -> &str {
        self.lunar_phase.as_deref().unwrap_or(NOT_FOUND)
    }
}
