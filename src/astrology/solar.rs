//! Solar sign lookup.
//!
//! The sign is a fixed calendar lookup on (month, day) using inclusive
//! ranges. Capricorn wraps the year boundary. No astronomy is involved.
//!
//! ```
//! use arcana_graph::astrology::{solar_sign, ZodiacSign};
//!
//! assert_eq!(solar_sign(1, 19), ZodiacSign::Capricorn);
//! assert_eq!(solar_sign(1, 20), ZodiacSign::Aquarius);
//! assert_eq!(solar_sign(13, 1), ZodiacSign::Unknown);
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The twelve zodiac signs, plus `Unknown` for dates outside every range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
    Unknown,
}

impl ZodiacSign {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// (sign, first (month, day), last (month, day)), both ends inclusive.
const SIGN_RANGES: [(ZodiacSign, (u32, u32), (u32, u32)); 12] = [
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    (ZodiacSign::Capricorn, (12, 22), (1, 19)),
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
    (ZodiacSign::Pisces, (2, 19), (3, 20)),
];

/// Longest each month can be; February allows the 29th.
const fn max_day(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Sign for a (month, day) pair.
///
/// Returns `ZodiacSign::Unknown` for pairs that are not calendar days
/// (month 0 or 13, April 31, ...).
#[must_use]
pub fn solar_sign(month: u32, day: u32) -> ZodiacSign {
    if !(1..=12).contains(&month) || day == 0 || day > max_day(month) {
        return ZodiacSign::Unknown;
    }

    let target = (month, day);
    SIGN_RANGES
        .iter()
        .find(|(_, start, end)| {
            if start <= end {
                *start <= target && target <= *end
            } else {
                // Range wraps the year boundary
                target >= *start || target <= *end
            }
        })
        .map(|(sign, _, _)| *sign)
        .unwrap_or(ZodiacSign::Unknown)
}

/// Sign in effect on `date`.
#[must_use]
pub fn current_solar_sign(date: NaiveDate) -> ZodiacSign {
    solar_sign(date.month(), date.day())
}
