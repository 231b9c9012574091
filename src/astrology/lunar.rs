//! Tabulated lunar phase events.
//!
//! The table maps a year to the phase events listed for it. Resolving the
//! phase for a date picks the latest event of that year dated on or before
//! the target. A date before the year's first event, or a year missing from
//! the table, resolves to `None`.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ReadingError, Result};

/// Date format of lunar event records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A dated phase event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarEvent {
    pub date: NaiveDate,
    pub phase: String,
}

impl LunarEvent {
    /// Create a new event.
    #[must_use]
    pub fn new(date: NaiveDate, phase: impl Into<String>) -> Self {
        Self {
            date,
            phase: phase.into(),
        }
    }
}

/// Lunar event as supplied by the loader: `{"date": "YYYY-MM-DD", "phase": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunarEventRecord {
    pub date: Option<String>,
    pub phase: Option<String>,
}

impl TryFrom<LunarEventRecord> for LunarEvent {
    type Error = ReadingError;

    fn try_from(record: LunarEventRecord) -> Result<Self> {
        let text = record.date.ok_or(ReadingError::missing("lunar event", "date"))?;
        let phase = record.phase.ok_or(ReadingError::missing("lunar event", "phase"))?;
        let date = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map_err(|_| ReadingError::InvalidDate { value: text.clone() })?;
        Ok(LunarEvent { date, phase })
    }
}

/// Latest event in `events` dated in `date`'s year and on or before `date`.
///
/// Events need not be sorted. Among events sharing the winning date the
/// one listed last wins.
#[must_use]
pub fn event_on_or_before(events: &[LunarEvent], date: NaiveDate) -> Option<&LunarEvent> {
    events
        .iter()
        .filter(|e| e.date.year() == date.year() && e.date <= date)
        .max_by_key(|e| e.date)
}

/// Phase name of `event_on_or_before`.
#[must_use]
pub fn lunar_phase_on_or_before(events: &[LunarEvent], date: NaiveDate) -> Option<&str> {
    event_on_or_before(events, date).map(|e| e.phase.as_str())
}

/// Year-keyed lunar event table.
///
/// ## Example
///
/// ```
/// use arcana_graph::astrology::{LunarEvent, LunarTable};
/// use chrono::NaiveDate;
///
/// let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
///
/// let mut table = LunarTable::new();
/// table.insert(2024, LunarEvent::new(day(1, 11), "New Moon"));
/// table.insert(2024, LunarEvent::new(day(1, 25), "Full Moon"));
///
/// assert_eq!(table.phase_on_or_before(day(1, 30)), Some("Full Moon"));
/// assert_eq!(table.phase_on_or_before(day(1, 5)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarTable {
    years: FxHashMap<i32, Vec<LunarEvent>>,
}

impl LunarTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event under `year`.
    pub fn insert(&mut self, year: i32, event: LunarEvent) {
        self.years.entry(year).or_default().push(event);
    }

    /// Validate a loader record and add it under the year key `year_key`.
    pub fn insert_record(&mut self, year_key: &str, record: LunarEventRecord) -> Result<()> {
        let year = parse_year(year_key)?;
        let event = LunarEvent::try_from(record)?;
        self.insert(year, event);
        Ok(())
    }

    /// Build a table from `(year key, records)` groups.
    ///
    /// Malformed keys reject their whole group; malformed records are
    /// rejected individually. Everything else is loaded.
    pub fn from_records<I>(groups: I) -> LunarTableLoad
    where
        I: IntoIterator<Item = (String, Vec<LunarEventRecord>)>,
    {
        let mut table = LunarTable::new();
        let mut rejected = Vec::new();

        for (year_key, records) in groups {
            let year = match parse_year(&year_key) {
                Ok(year) => year,
                Err(error) => {
                    warn!(%error, "skipping lunar table year");
                    rejected.push(error);
                    continue;
                }
            };

            for record in records {
                match LunarEvent::try_from(record) {
                    Ok(event) => table.insert(year, event),
                    Err(error) => {
                        warn!(year, %error, "skipping lunar event record");
                        rejected.push(error);
                    }
                }
            }
        }

        LunarTableLoad { table, rejected }
    }

    /// Events listed under `year`, in insertion order.
    #[must_use]
    pub fn events(&self, year: i32) -> &[LunarEvent] {
        self.years.get(&year).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Latest event of `date`'s year dated on or before `date`.
    #[must_use]
    pub fn event_on_or_before(&self, date: NaiveDate) -> Option<&LunarEvent> {
        event_on_or_before(self.events(date.year()), date)
    }

    /// Phase of the latest event of `date`'s year dated on or before `date`.
    #[must_use]
    pub fn phase_on_or_before(&self, date: NaiveDate) -> Option<&str> {
        lunar_phase_on_or_before(self.events(date.year()), date)
    }

    /// Number of years with at least one event.
    #[must_use]
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Check if the table has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Result of `LunarTable::from_records`.
#[derive(Clone, Debug)]
pub struct LunarTableLoad {
    pub table: LunarTable,
    pub rejected: Vec<ReadingError>,
}

fn parse_year(key: &str) -> Result<i32> {
    key.trim()
        .parse()
        .map_err(|_| ReadingError::InvalidYear { value: key.to_string() })
}
