//! Liturgical calendar computations for Julian and Gregorian years.
//!
//! A [`LiturgicalCalendar`] is constructed once per year: the year is
//! classified as Julian (through 1582) or Gregorian (1583 on), Easter Sunday
//! is resolved for that system, and every other liturgical date is derived
//! from the anchor by pure day offsets or fixed-date rules. Instances are
//! immutable; repeated queries always return the same dates.
//!
//! ```
//! use liturgical_calendar::LiturgicalCalendar;
//!
//! let cal = LiturgicalCalendar::new(2024)?;
//! assert_eq!(cal.easter_sunday().to_string(), "2024-03-31");
//! assert_eq!(cal.ash_wednesday().to_string(), "2024-02-14");
//! # Ok::<(), liturgical_calendar::EasterError>(())
//! ```

mod consts;
mod data;
mod easter;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use data::JULIAN_EASTER_DATES;
pub use easter::{EasterError, JulianEasterTable, gregorian_easter, resolve_easter};
pub use range::{DateRange, RangeError};
pub use types::{CalendarSystem, Date, DateError, days_in_month, is_leap};

use crate::prelude::*;
use serde::Serialize;
use std::sync::LazyLock;

static BUNDLED_TABLE: LazyLock<JulianEasterTable> = LazyLock::new(JulianEasterTable::bundled);

/// The fixed enumeration of single-date liturgical occasions.
/// `Display` yields the canonical English label of each feast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Feast {
    #[display(fmt = "Epiphany")]
    Epiphany,
    #[display(fmt = "Baptism of the Lord")]
    BaptismOfTheLord,
    #[display(fmt = "Ash Wednesday")]
    AshWednesday,
    #[display(fmt = "Palm Sunday")]
    PalmSunday,
    #[display(fmt = "Holy Thursday")]
    HolyThursday,
    #[display(fmt = "Good Friday")]
    GoodFriday,
    #[display(fmt = "Holy Saturday")]
    HolySaturday,
    #[display(fmt = "Easter Sunday")]
    EasterSunday,
    #[display(fmt = "Ascension")]
    Ascension,
    #[display(fmt = "Pentecost")]
    Pentecost,
    #[display(fmt = "Trinity Sunday")]
    TrinitySunday,
    #[display(fmt = "Corpus Christi")]
    CorpusChristi,
    #[display(fmt = "Christ the King")]
    ChristTheKing,
    #[display(fmt = "Christmas")]
    Christmas,
}

impl Feast {
    /// Every single-date feast, in liturgical-year order.
    pub const ALL: [Self; 14] = [
        Self::Epiphany,
        Self::BaptismOfTheLord,
        Self::AshWednesday,
        Self::PalmSunday,
        Self::HolyThursday,
        Self::GoodFriday,
        Self::HolySaturday,
        Self::EasterSunday,
        Self::Ascension,
        Self::Pentecost,
        Self::TrinitySunday,
        Self::CorpusChristi,
        Self::ChristTheKing,
        Self::Christmas,
    ];
}

/// A liturgical calendar for one year.
///
/// Construction resolves the Easter anchor once; every accessor afterwards
/// is a pure derivation from that anchor (or from the year, for fixed
/// feasts). There is no hidden state and nothing is cached across instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiturgicalCalendar {
    year: i32,
    calendar: CalendarSystem,
    easter: Date,
}

impl LiturgicalCalendar {
    /// Creates the calendar for a year, resolving Easter against the
    /// bundled Julian dataset for Julian-era years.
    ///
    /// # Errors
    /// Returns `EasterError::DataUnavailable` if the year is Julian and the
    /// bundled dataset (1000-1582) has no entry for it.
    pub fn new(year: i32) -> Result<Self, EasterError> {
        Self::with_table(year, &BUNDLED_TABLE)
    }

    /// Creates the calendar for a year, resolving Julian-era years against
    /// a caller-supplied dataset. The table is only read during
    /// construction and is not retained.
    ///
    /// # Errors
    /// Returns `EasterError::DataUnavailable` if the year is Julian and the
    /// table has no entry for it.
    pub fn with_table(year: i32, table: &JulianEasterTable) -> Result<Self, EasterError> {
        let easter = resolve_easter(year, table)?;
        Ok(Self {
            year,
            calendar: CalendarSystem::for_year(year),
            easter,
        })
    }

    /// The year this calendar covers
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The calendar system the year falls under
    #[inline]
    pub const fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// Whether the year is a leap year under its own calendar's rules
    pub const fn is_leap_year(&self) -> bool {
        is_leap(self.year, self.calendar)
    }

    // --- Lent and Holy Week ---

    /// Ash Wednesday, the start of Lent: 46 days before Easter
    /// (40 fast days plus the six Sundays not counted in Lent).
    pub fn ash_wednesday(&self) -> Date {
        self.easter + ASH_WEDNESDAY_OFFSET
    }

    /// Palm Sunday, the start of Holy Week: one week before Easter.
    pub fn palm_sunday(&self) -> Date {
        self.easter + PALM_SUNDAY_OFFSET
    }

    /// Holy Thursday, commemorating the Last Supper.
    pub fn holy_thursday(&self) -> Date {
        self.easter + HOLY_THURSDAY_OFFSET
    }

    /// Good Friday, commemorating the Crucifixion.
    pub fn good_friday(&self) -> Date {
        self.easter + GOOD_FRIDAY_OFFSET
    }

    /// Holy Saturday, the day before Easter.
    pub fn holy_saturday(&self) -> Date {
        self.easter + HOLY_SATURDAY_OFFSET
    }

    /// The span of Lent: Ash Wednesday through the day before Palm Sunday.
    pub fn lent(&self) -> DateRange {
        DateRange::new_unchecked(self.ash_wednesday(), self.palm_sunday() - 1)
    }

    // --- Eastertide ---

    /// Easter Sunday, the anchor date every movable feast derives from.
    #[inline]
    pub const fn easter_sunday(&self) -> Date {
        self.easter
    }

    /// Ascension: the 40th day of Eastertide, counted inclusively from
    /// Easter Sunday, hence 39 days after.
    pub fn ascension(&self) -> Date {
        self.easter + ASCENSION_OFFSET
    }

    /// Pentecost: the 50th day of Eastertide, 49 days after Easter.
    pub fn pentecost(&self) -> Date {
        self.easter + PENTECOST_OFFSET
    }

    /// Trinity Sunday, the Sunday after Pentecost.
    pub fn trinity_sunday(&self) -> Date {
        self.easter + TRINITY_SUNDAY_OFFSET
    }

    /// Corpus Christi, the Thursday after Trinity Sunday.
    pub fn corpus_christi(&self) -> Date {
        self.easter + CORPUS_CHRISTI_OFFSET
    }

    // --- Christmastide and Epiphany ---

    /// Epiphany, fixed on January 6.
    pub fn epiphany(&self) -> Date {
        Date::new_unchecked(self.year, EPIPHANY_MONTH, EPIPHANY_DAY)
    }

    /// Baptism of the Lord: `Epiphany + ((7 - weekday(Epiphany)) mod 7)`
    /// days, with weekday counted Monday = 0 .. Sunday = 6.
    pub fn baptism_of_the_lord(&self) -> Date {
        let epiphany = self.epiphany();
        let shift = (DAYS_PER_WEEK - i32::from(epiphany.weekday())) % DAYS_PER_WEEK;
        epiphany + shift
    }

    /// Christmas, fixed on December 25.
    pub fn christmas(&self) -> Date {
        Date::new_unchecked(self.year, CHRISTMAS_MONTH, CHRISTMAS_DAY)
    }

    // --- Advent and the close of the liturgical year ---

    /// First Sunday of Advent: the fourth Sunday before Christmas, measured
    /// back three weeks from `Christmas - ((7 - weekday(Christmas)) mod 7)`.
    pub fn advent_start(&self) -> Date {
        let christmas = self.christmas();
        let days_to_sunday = (DAYS_PER_WEEK - i32::from(christmas.weekday())) % DAYS_PER_WEEK;
        christmas - (days_to_sunday + 21)
    }

    /// The four Sundays of Advent, one week apart from [`Self::advent_start`].
    pub fn advent_sundays(&self) -> [Date; ADVENT_SUNDAYS] {
        let start = self.advent_start();
        [
            start,
            start + DAYS_PER_WEEK,
            start + 2 * DAYS_PER_WEEK,
            start + 3 * DAYS_PER_WEEK,
        ]
    }

    /// Christ the King, the last Sunday of the liturgical year: one week
    /// before the start of Advent.
    pub fn christ_the_king(&self) -> Date {
        self.advent_start() - DAYS_PER_WEEK
    }

    // --- bulk queries ---

    /// The date of any single-date feast.
    pub fn date_of(&self, feast: Feast) -> Date {
        match feast {
            Feast::Epiphany => self.epiphany(),
            Feast::BaptismOfTheLord => self.baptism_of_the_lord(),
            Feast::AshWednesday => self.ash_wednesday(),
            Feast::PalmSunday => self.palm_sunday(),
            Feast::HolyThursday => self.holy_thursday(),
            Feast::GoodFriday => self.good_friday(),
            Feast::HolySaturday => self.holy_saturday(),
            Feast::EasterSunday => self.easter_sunday(),
            Feast::Ascension => self.ascension(),
            Feast::Pentecost => self.pentecost(),
            Feast::TrinitySunday => self.trinity_sunday(),
            Feast::CorpusChristi => self.corpus_christi(),
            Feast::ChristTheKing => self.christ_the_king(),
            Feast::Christmas => self.christmas(),
        }
    }

    /// Every liturgical date of the year, plus the year, calendar system,
    /// and leap-year metadata, in one structured result.
    pub fn all_dates(&self) -> LiturgicalDateSet {
        LiturgicalDateSet {
            year: self.year,
            calendar: self.calendar,
            is_leap_year: self.is_leap_year(),
            epiphany: self.epiphany(),
            baptism_of_the_lord: self.baptism_of_the_lord(),
            ash_wednesday: self.ash_wednesday(),
            lent: self.lent(),
            palm_sunday: self.palm_sunday(),
            holy_thursday: self.holy_thursday(),
            good_friday: self.good_friday(),
            holy_saturday: self.holy_saturday(),
            easter_sunday: self.easter_sunday(),
            ascension: self.ascension(),
            pentecost: self.pentecost(),
            trinity_sunday: self.trinity_sunday(),
            corpus_christi: self.corpus_christi(),
            christ_the_king: self.christ_the_king(),
            advent_sundays: self.advent_sundays(),
            christmas: self.christmas(),
        }
    }
}

/// The complete set of liturgical dates for one year. Serializes with the
/// canonical English labels as keys, so downstream consumers (renderers,
/// exports) need no translation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiturgicalDateSet {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Calendar")]
    pub calendar: CalendarSystem,
    #[serde(rename = "Is Leap Year")]
    pub is_leap_year: bool,
    #[serde(rename = "Epiphany")]
    pub epiphany: Date,
    #[serde(rename = "Baptism of the Lord")]
    pub baptism_of_the_lord: Date,
    #[serde(rename = "Ash Wednesday")]
    pub ash_wednesday: Date,
    #[serde(rename = "Lent")]
    pub lent: DateRange,
    #[serde(rename = "Palm Sunday")]
    pub palm_sunday: Date,
    #[serde(rename = "Holy Thursday")]
    pub holy_thursday: Date,
    #[serde(rename = "Good Friday")]
    pub good_friday: Date,
    #[serde(rename = "Holy Saturday")]
    pub holy_saturday: Date,
    #[serde(rename = "Easter Sunday")]
    pub easter_sunday: Date,
    #[serde(rename = "Ascension")]
    pub ascension: Date,
    #[serde(rename = "Pentecost")]
    pub pentecost: Date,
    #[serde(rename = "Trinity Sunday")]
    pub trinity_sunday: Date,
    #[serde(rename = "Corpus Christi")]
    pub corpus_christi: Date,
    #[serde(rename = "Christ the King")]
    pub christ_the_king: Date,
    #[serde(rename = "Advent Sundays")]
    pub advent_sundays: [Date; ADVENT_SUNDAYS],
    #[serde(rename = "Christmas")]
    pub christmas: Date,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    fn gregorian_2024() -> LiturgicalCalendar {
        LiturgicalCalendar::new(2024).unwrap()
    }

    #[test]
    fn test_create_gregorian_calendar() {
        let cal = gregorian_2024();
        assert_eq!(cal.year(), 2024);
        assert_eq!(cal.calendar(), CalendarSystem::Gregorian);
        assert_eq!(cal.easter_sunday(), date(2024, 3, 31));
        assert!(cal.is_leap_year());
    }

    #[test]
    fn test_create_julian_calendar() {
        let cal = LiturgicalCalendar::new(1200).unwrap();
        assert_eq!(cal.year(), 1200);
        assert_eq!(cal.calendar(), CalendarSystem::Julian);
        assert_eq!(cal.easter_sunday(), date(1200, 4, 9));
        assert!(cal.is_leap_year());
    }

    #[test]
    fn test_julian_year_no_data() {
        assert_eq!(
            LiturgicalCalendar::new(400),
            Err(EasterError::DataUnavailable(400))
        );
        assert_eq!(
            LiturgicalCalendar::new(-100),
            Err(EasterError::DataUnavailable(-100))
        );
    }

    #[test]
    fn test_boundary_years() {
        let last_julian = LiturgicalCalendar::new(1582).unwrap();
        assert_eq!(last_julian.calendar(), CalendarSystem::Julian);
        assert_eq!(last_julian.easter_sunday(), date(1582, 4, 15));

        let first_gregorian = LiturgicalCalendar::new(1583).unwrap();
        assert_eq!(first_gregorian.calendar(), CalendarSystem::Gregorian);
        assert_eq!(first_gregorian.easter_sunday(), date(1583, 4, 10));
    }

    #[test]
    fn test_with_table_synthetic_dataset() {
        let table = JulianEasterTable::from_entries([(400, 4, 1)]);
        let cal = LiturgicalCalendar::with_table(400, &table).unwrap();
        assert_eq!(cal.easter_sunday(), date(400, 4, 1));
        assert_eq!(cal.calendar(), CalendarSystem::Julian);

        assert_eq!(
            LiturgicalCalendar::with_table(401, &table),
            Err(EasterError::DataUnavailable(401))
        );
    }

    #[test]
    fn test_with_table_gregorian_ignores_table() {
        // The table is only consulted for Julian years
        let cal = LiturgicalCalendar::with_table(2024, &JulianEasterTable::default()).unwrap();
        assert_eq!(cal.easter_sunday(), date(2024, 3, 31));
    }

    #[test]
    fn test_lent_and_holy_week_2024() {
        let cal = gregorian_2024();
        assert_eq!(cal.ash_wednesday(), date(2024, 2, 14));
        assert_eq!(cal.palm_sunday(), date(2024, 3, 24));
        assert_eq!(cal.holy_thursday(), date(2024, 3, 28));
        assert_eq!(cal.good_friday(), date(2024, 3, 29));
        assert_eq!(cal.holy_saturday(), date(2024, 3, 30));
        assert_eq!(cal.lent().dates(), (date(2024, 2, 14), date(2024, 3, 23)));
    }

    #[test]
    fn test_eastertide_2024() {
        let cal = gregorian_2024();
        assert_eq!(cal.ascension(), date(2024, 5, 9));
        assert_eq!(cal.pentecost(), date(2024, 5, 19));
        assert_eq!(cal.trinity_sunday(), date(2024, 5, 26));
        assert_eq!(cal.corpus_christi(), date(2024, 5, 30));
    }

    #[test]
    fn test_fixed_feasts_2024() {
        let cal = gregorian_2024();
        assert_eq!(cal.epiphany(), date(2024, 1, 6));
        assert_eq!(cal.christmas(), date(2024, 12, 25));
        // January 6, 2024 is a Saturday; the rule lands on the 8th
        assert_eq!(cal.baptism_of_the_lord(), date(2024, 1, 8));
    }

    #[test]
    fn test_baptism_when_epiphany_is_monday() {
        // January 6, 2025 is a Monday: the (7 - weekday) mod 7 shift is zero
        let cal = LiturgicalCalendar::new(2025).unwrap();
        assert_eq!(cal.baptism_of_the_lord(), date(2025, 1, 6));
    }

    #[test]
    fn test_advent_2024() {
        let cal = gregorian_2024();
        assert_eq!(cal.advent_start(), date(2024, 11, 29));
        assert_eq!(
            cal.advent_sundays(),
            [
                date(2024, 11, 29),
                date(2024, 12, 6),
                date(2024, 12, 13),
                date(2024, 12, 20),
            ]
        );
        assert_eq!(cal.christ_the_king(), date(2024, 11, 22));
    }

    #[test]
    fn test_advent_2025() {
        let cal = LiturgicalCalendar::new(2025).unwrap();
        assert_eq!(cal.advent_start(), date(2025, 11, 30));
        assert_eq!(cal.christ_the_king(), date(2025, 11, 23));
    }

    #[test]
    fn test_julian_derived_dates_1200() {
        let cal = LiturgicalCalendar::new(1200).unwrap();
        assert_eq!(cal.ash_wednesday(), date(1200, 2, 23));
        assert_eq!(cal.palm_sunday(), date(1200, 4, 2));
        assert_eq!(cal.pentecost(), date(1200, 5, 28));
        assert_eq!(cal.corpus_christi(), date(1200, 6, 8));
        assert_eq!(cal.lent().dates(), (date(1200, 2, 23), date(1200, 4, 1)));
        assert_eq!(cal.advent_start(), date(1200, 12, 4));
    }

    #[test]
    fn test_easter_2025_derivations() {
        let cal = LiturgicalCalendar::new(2025).unwrap();
        assert_eq!(cal.easter_sunday(), date(2025, 4, 20));
        assert_eq!(cal.ash_wednesday(), date(2025, 3, 5));
        assert_eq!(cal.good_friday(), date(2025, 4, 18));
        assert_eq!(cal.pentecost(), date(2025, 6, 8));
    }

    #[test]
    fn test_date_of_matches_accessors() {
        let cal = gregorian_2024();
        for feast in Feast::ALL {
            let via_enum = cal.date_of(feast);
            let via_accessor = match feast {
                Feast::Epiphany => cal.epiphany(),
                Feast::BaptismOfTheLord => cal.baptism_of_the_lord(),
                Feast::AshWednesday => cal.ash_wednesday(),
                Feast::PalmSunday => cal.palm_sunday(),
                Feast::HolyThursday => cal.holy_thursday(),
                Feast::GoodFriday => cal.good_friday(),
                Feast::HolySaturday => cal.holy_saturday(),
                Feast::EasterSunday => cal.easter_sunday(),
                Feast::Ascension => cal.ascension(),
                Feast::Pentecost => cal.pentecost(),
                Feast::TrinitySunday => cal.trinity_sunday(),
                Feast::CorpusChristi => cal.corpus_christi(),
                Feast::ChristTheKing => cal.christ_the_king(),
                Feast::Christmas => cal.christmas(),
            };
            assert_eq!(via_enum, via_accessor, "mismatch for {feast}");
        }
    }

    #[test]
    fn test_feast_labels() {
        assert_eq!(Feast::AshWednesday.to_string(), "Ash Wednesday");
        assert_eq!(Feast::BaptismOfTheLord.to_string(), "Baptism of the Lord");
        assert_eq!(Feast::HolySaturday.to_string(), "Holy Saturday");
        assert_eq!(Feast::ChristTheKing.to_string(), "Christ the King");
        assert_eq!(Feast::CorpusChristi.to_string(), "Corpus Christi");
        assert_eq!(Feast::ALL.len(), 14);
    }

    #[test]
    fn test_idempotence() {
        let cal = gregorian_2024();
        assert_eq!(cal.easter_sunday(), cal.easter_sunday());
        assert_eq!(cal.advent_sundays(), cal.advent_sundays());
        assert_eq!(cal.all_dates(), cal.all_dates());
        for feast in Feast::ALL {
            assert_eq!(cal.date_of(feast), cal.date_of(feast));
        }
    }

    #[test]
    fn test_movable_feast_ordering() {
        for year in (1000..=2100).step_by(7) {
            let cal = LiturgicalCalendar::new(year).unwrap();
            let chain = [
                cal.ash_wednesday(),
                cal.palm_sunday(),
                cal.holy_thursday(),
                cal.good_friday(),
                cal.holy_saturday(),
                cal.easter_sunday(),
                cal.ascension(),
                cal.pentecost(),
                cal.trinity_sunday(),
                cal.corpus_christi(),
            ];
            for pair in chain.windows(2) {
                assert!(pair[0] < pair[1], "ordering broken in {year}: {:?}", pair);
            }
        }
    }

    #[test]
    fn test_advent_ordering() {
        for year in (1000..=2100).step_by(7) {
            let cal = LiturgicalCalendar::new(year).unwrap();
            let sundays = cal.advent_sundays();
            assert!(cal.christ_the_king() < sundays[0], "year {year}");
            for pair in sundays.windows(2) {
                assert!(pair[0] < pair[1], "year {year}");
            }
            // The fourth Sunday coincides with Christmas in years where
            // December 25 falls on the weekday the shift rule anchors to
            assert!(sundays[3] <= cal.christmas(), "year {year}");
        }
    }

    #[test]
    fn test_all_dates_2024() {
        let set = gregorian_2024().all_dates();
        assert_eq!(set.year, 2024);
        assert_eq!(set.calendar, CalendarSystem::Gregorian);
        assert!(set.is_leap_year);
        assert_eq!(set.easter_sunday, date(2024, 3, 31));
        assert_eq!(set.ash_wednesday, date(2024, 2, 14));
        assert_eq!(set.lent.dates(), (date(2024, 2, 14), date(2024, 3, 23)));
        assert_eq!(set.advent_sundays[0], date(2024, 11, 29));
        assert_eq!(set.christmas, date(2024, 12, 25));
    }

    #[test]
    fn test_all_dates_julian_metadata() {
        let set = LiturgicalCalendar::new(1201).unwrap().all_dates();
        assert_eq!(set.year, 1201);
        assert_eq!(set.calendar, CalendarSystem::Julian);
        assert!(!set.is_leap_year);
    }

    #[test]
    fn test_all_dates_serialization_labels() {
        let set = gregorian_2024().all_dates();
        let value = serde_json::to_value(set).unwrap();
        let obj = value.as_object().unwrap();

        for label in [
            "Year",
            "Calendar",
            "Is Leap Year",
            "Epiphany",
            "Baptism of the Lord",
            "Ash Wednesday",
            "Lent",
            "Palm Sunday",
            "Holy Thursday",
            "Good Friday",
            "Holy Saturday",
            "Easter Sunday",
            "Ascension",
            "Pentecost",
            "Trinity Sunday",
            "Corpus Christi",
            "Christ the King",
            "Advent Sundays",
            "Christmas",
        ] {
            assert!(obj.contains_key(label), "missing label {label:?}");
        }
        assert_eq!(obj.len(), 19);

        assert_eq!(value["Year"], 2024);
        assert_eq!(value["Calendar"], "Gregorian");
        assert_eq!(value["Is Leap Year"], true);
        assert_eq!(value["Easter Sunday"], "2024-03-31");
        assert_eq!(value["Lent"], "2024-02-14/2024-03-23");
        assert_eq!(value["Advent Sundays"][3], "2024-12-20");
    }

    #[test]
    fn test_bundled_dataset_reexport() {
        assert_eq!(JULIAN_EASTER_DATES.len(), 583);
        assert_eq!(JULIAN_EASTER_DATES[0], (1000, 3, 31));
    }
}
