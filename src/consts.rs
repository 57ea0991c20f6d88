/// Last year of the Julian calendar era (inclusive)
pub const JULIAN_FINAL_YEAR: i32 = 1582;

/// First year of the Gregorian calendar, per the 1582 reform of Gregory XIII
pub const GREGORIAN_REFORM_YEAR: i32 = 1583;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for April
pub const APRIL: u8 = 4;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by leap-year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before the first of each month in a non-leap year
/// (index 0 unused, months are 1-indexed)
pub(crate) const DAYS_BEFORE_MONTH: [i64; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Length of the Metonic lunar cycle in years (golden-number period)
pub const METONIC_CYCLE: i32 = 19;

/// Days per week
pub const DAYS_PER_WEEK: i32 = 7;

/// Number of Sundays in Advent
pub const ADVENT_SUNDAYS: usize = 4;

/// Ash Wednesday opens Lent, 46 days before Easter
/// (40 fast days plus the six Sundays not counted in Lent)
pub const ASH_WEDNESDAY_OFFSET: i32 = -46;
/// Palm Sunday opens Holy Week, one week before Easter
pub const PALM_SUNDAY_OFFSET: i32 = -7;
/// Holy Thursday, three days before Easter
pub const HOLY_THURSDAY_OFFSET: i32 = -3;
/// Good Friday, two days before Easter
pub const GOOD_FRIDAY_OFFSET: i32 = -2;
/// Holy Saturday, the day before Easter
pub const HOLY_SATURDAY_OFFSET: i32 = -1;
/// Ascension, 40 days counted inclusively from Easter Sunday
pub const ASCENSION_OFFSET: i32 = 39;
/// Pentecost, 50 days counted inclusively from Easter Sunday
pub const PENTECOST_OFFSET: i32 = 49;
/// Trinity Sunday, the Sunday after Pentecost
pub const TRINITY_SUNDAY_OFFSET: i32 = 56;
/// Corpus Christi, the Thursday after Trinity Sunday
pub const CORPUS_CHRISTI_OFFSET: i32 = 60;

/// Epiphany is fixed on January 6
pub const EPIPHANY_MONTH: u8 = JANUARY;
/// Epiphany day of month
pub const EPIPHANY_DAY: u8 = 6;
/// Christmas is fixed on December 25
pub const CHRISTMAS_MONTH: u8 = DECEMBER;
/// Christmas day of month
pub const CHRISTMAS_DAY: u8 = 25;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
