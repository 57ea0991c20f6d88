//! Easter resolution for both calendar systems.
//!
//! Gregorian years get the closed-form Computus congruence; Julian years are
//! resolved against a precomputed [`JulianEasterTable`]. A missing table
//! entry is surfaced as [`EasterError::DataUnavailable`], never silently
//! substituted with an approximate date.

use crate::consts::{GREGORIAN_REFORM_YEAR, METONIC_CYCLE};
use crate::data::JULIAN_EASTER_DATES;
use crate::types::{CalendarSystem, Date};
use std::collections::BTreeMap;

/// The two failure modes of Easter resolution. Both are deterministic and
/// fully described by the offending year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EasterError {
    /// A Julian year was requested but the dataset has no entry for it.
    #[error("No Easter data available for Julian year {0}")]
    DataUnavailable(i32),

    /// The Gregorian computation was invoked for a pre-reform year.
    #[error("Year {0} is invalid for the Gregorian Computus (must be >= 1583)")]
    InvalidYear(i32),
}

/// Computes Easter Sunday for a Gregorian year with the Gauss/Clavius
/// Computus congruence. Integer arithmetic only; every intermediate value is
/// non-negative for years >= 1583.
///
/// The result is guaranteed by the formula's number theory to be a Sunday
/// between March 22 and April 25.
///
/// # Errors
/// Returns `EasterError::InvalidYear` if `year < 1583`. Under normal
/// construction the classification rule makes this unreachable, but the
/// function rejects out-of-domain input when called directly.
pub fn gregorian_easter(year: i32) -> Result<Date, EasterError> {
    if year < GREGORIAN_REFORM_YEAR {
        return Err(EasterError::InvalidYear(year));
    }

    // Golden number: position in the 19-year Metonic lunar cycle
    let a = year % METONIC_CYCLE;
    // Century and position within the century
    let b = year / 100;
    let c = year % 100;
    // Epact correction for the paschal full moon
    let d = (19 * a + b - b / 4 - ((b - (b + 8) / 25 + 1) / 3) + 15) % 30;
    // Days from the full moon to the following Sunday
    let e = (32 + 2 * (b % 4) + 2 * (c / 4) - d - (c % 4)) % 7;
    // Fold both corrections into a day count anchored at March
    let f = d + e - 7 * ((a + 11 * d + 22 * e) / 451) + 114;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (month, day) = ((f / 31) as u8, (f % 31 + 1) as u8);
    Ok(Date::new_unchecked(year, month, day))
}

/// An immutable mapping from Julian-era year to the month/day of Easter
/// Sunday in Julian reckoning.
///
/// The library only reads the table. Entries are trusted to name real
/// calendar days; the bundled dataset does, and callers injecting their own
/// historical data own that guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JulianEasterTable {
    entries: BTreeMap<i32, (u8, u8)>,
}

impl JulianEasterTable {
    /// The dataset shipped with the crate, covering the years 1000-1582.
    pub fn bundled() -> Self {
        Self::from_entries(JULIAN_EASTER_DATES.iter().copied())
    }

    /// Builds a table from `(year, month, day)` entries, e.g. a synthetic
    /// dataset for tests or an alternative historical source.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i32, u8, u8)>,
    {
        Self {
            entries: entries.into_iter().map(|(y, m, d)| (y, (m, d))).collect(),
        }
    }

    /// Looks up the raw `(month, day)` pair for a year, if present.
    pub fn get(&self, year: i32) -> Option<(u8, u8)> {
        self.entries.get(&year).copied()
    }

    /// Whether the table has an entry for the given year
    pub fn contains_year(&self, year: i32) -> bool {
        self.entries.contains_key(&year)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest year covered by the table, if any
    pub fn min_year(&self) -> Option<i32> {
        self.entries.keys().next().copied()
    }

    /// Latest year covered by the table, if any
    pub fn max_year(&self) -> Option<i32> {
        self.entries.keys().next_back().copied()
    }

    /// Resolves Easter Sunday for a Julian year from the table.
    ///
    /// # Errors
    /// Returns `EasterError::DataUnavailable` if the table has no entry for
    /// the year. A missing year is a data-gap condition, not "the year had
    /// no Easter".
    pub fn easter_for(&self, year: i32) -> Result<Date, EasterError> {
        match self.get(year) {
            Some((month, day)) => Ok(Date::new_unchecked(year, month, day)),
            None => Err(EasterError::DataUnavailable(year)),
        }
    }
}

/// Resolves Easter Sunday for any year: table lookup for Julian years,
/// Computus for Gregorian ones.
///
/// # Errors
/// Returns `EasterError::DataUnavailable` for a Julian year missing from the
/// table. The `InvalidYear` arm of the Gregorian path is unreachable here
/// because classification already routed pre-1583 years to the table.
pub fn resolve_easter(year: i32, table: &JulianEasterTable) -> Result<Date, EasterError> {
    match CalendarSystem::for_year(year) {
        CalendarSystem::Julian => table.easter_for(year),
        CalendarSystem::Gregorian => gregorian_easter(year),
    }
}
