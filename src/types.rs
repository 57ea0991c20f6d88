use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DATE_SEPARATOR, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JULIAN_FINAL_YEAR, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// The two calendar systems the library distinguishes. Classification is a
/// pure function of the year: [`CalendarSystem::Julian`] for years up to and
/// including 1582, [`CalendarSystem::Gregorian`] from 1583 on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CalendarSystem {
    /// The Julian calendar, in civil use until the 1582 reform
    #[display(fmt = "Julian")]
    Julian,
    /// The Gregorian calendar, in use from 1583 on
    #[display(fmt = "Gregorian")]
    Gregorian,
}

impl CalendarSystem {
    /// Classifies a year into its calendar system. The 1582/1583 boundary is
    /// the historical adoption date of the Gregorian reform and is not
    /// configurable.
    pub const fn for_year(year: i32) -> Self {
        if year <= JULIAN_FINAL_YEAR {
            Self::Julian
        } else {
            Self::Gregorian
        }
    }
}

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
}

impl std::error::Error for DateError {}

/// A concrete calendar date in the proleptic Gregorian calendar.
///
/// Day arithmetic and weekday computation follow the proleptic Gregorian
/// calendar for all years, including Julian-era ones; dates looked up from a
/// Julian Easter table carry Julian-reckoning month/day values but share this
/// single arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month", "day")]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a new date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` if the
    /// components do not name a real calendar day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { month, day, year });
        }
        Ok(Self { year, month, day })
    }

    /// Constructs a date whose components are already known to be valid,
    /// e.g. the output of the Computus formula.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MAX_MONTH);
        debug_assert!(day != 0);
        Self { year, month, day }
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day-of-month component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Proleptic Gregorian ordinal, with 0001-01-01 as day 1.
    pub fn ordinal(self) -> i64 {
        let leap_shift = if self.month > FEBRUARY && is_leap(self.year, CalendarSystem::Gregorian)
        {
            1
        } else {
            0
        };
        days_before_year(self.year)
            + DAYS_BEFORE_MONTH[self.month as usize]
            + leap_shift
            + i64::from(self.day)
    }

    /// Inverse of [`Date::ordinal`].
    pub fn from_ordinal(ordinal: i64) -> Self {
        let mut n = ordinal - 1;
        let n400 = n.div_euclid(146_097);
        n = n.rem_euclid(146_097);
        let n100 = n / 36_524;
        n %= 36_524;
        let n4 = n / 1_461;
        n %= 1_461;
        let n1 = n / 365;
        n %= 365;

        #[allow(clippy::cast_possible_truncation)]
        let year = (400 * n400 + 100 * n100 + 4 * n4 + n1 + 1) as i32;
        if n1 == 4 || n100 == 4 {
            // Landed on December 31 of a leap-cycle boundary year
            return Self::new_unchecked(year - 1, 12, 31);
        }

        let mut month: u8 = 1;
        let mut remaining = n;
        loop {
            let len = i64::from(days_in_month(year, month));
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = remaining as u8 + 1;
        Self::new_unchecked(year, month, day)
    }

    /// Day of the week with Monday = 0 .. Sunday = 6.
    pub fn weekday(self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let wd = (self.ordinal() - 1).rem_euclid(7) as u8;
        wd
    }
}

impl Add<i32> for Date {
    type Output = Self;

    fn add(self, days: i32) -> Self {
        Self::from_ordinal(self.ordinal() + i64::from(days))
    }
}

impl Sub<i32> for Date {
    type Output = Self;

    fn sub(self, days: i32) -> Self {
        Self::from_ordinal(self.ordinal() - i64::from(days))
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }
        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;
        Self::new(year, month, day)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --- helpers ---

/// Whether a year is a leap year under the rules of the given calendar
/// system. Total over all integers; Euclidean remainders keep negative
/// (astronomical) year numbers well-behaved.
pub const fn is_leap(year: i32, calendar: CalendarSystem) -> bool {
    match calendar {
        CalendarSystem::Julian => year.rem_euclid(LEAP_YEAR_CYCLE) == 0,
        CalendarSystem::Gregorian => {
            year.rem_euclid(LEAP_YEAR_CYCLE) == 0
                && (year.rem_euclid(CENTURY_CYCLE) != 0 || year.rem_euclid(GREGORIAN_CYCLE) == 0)
        }
    }
}

/// Civil (Gregorian-rule) month length, matching the arithmetic calendar
/// that [`Date`] lives in.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap(year, CalendarSystem::Gregorian) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

fn days_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}
