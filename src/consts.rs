/// Maximum valid Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Maximum valid Gregorian month (December)
pub const MAX_GREGORIAN_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Days before the start of each Gregorian month in a common year
/// (index 0 is unused, months are 1-indexed)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Absolute day of 9999-12-31, the last representable Gregorian date
pub const MAX_ABSOLUTE_DAY: i64 = 3_652_059;

// Hebrew months, numbered from Nissan as the calendar's ordinal months.

/// Nissan, the first month counted from the spring
pub const NISSAN: u8 = 1;
/// Iyar
pub const IYAR: u8 = 2;
/// Sivan
pub const SIVAN: u8 = 3;
/// Tammuz
pub const TAMMUZ: u8 = 4;
/// Av
pub const AV: u8 = 5;
/// Elul, the last month of the Hebrew year
pub const ELUL: u8 = 6;
/// Tishrei, the month Rosh Hashana starts
pub const TISHREI: u8 = 7;
/// Cheshvan, 29 or 30 days
pub const CHESHVAN: u8 = 8;
/// Kislev, 29 or 30 days
pub const KISLEV: u8 = 9;
/// Teves
pub const TEVES: u8 = 10;
/// Shevat
pub const SHEVAT: u8 = 11;
/// Adar, or Adar I in a leap year
pub const ADAR: u8 = 12;
/// Adar II, only present in leap years
pub const ADAR_II: u8 = 13;

/// Earliest supported Hebrew year (18 Teves 3761 is 0001-01-01)
pub const MIN_HEBREW_YEAR: u16 = 3761;
/// First supported day of Teves in `MIN_HEBREW_YEAR`
pub const MIN_TEVES_DAY: u8 = 18;
/// Latest supported Hebrew year (28 Cheshvan 13760 is 9999-12-31)
pub const MAX_HEBREW_YEAR: u16 = 13_760;
/// Last supported day of Cheshvan in `MAX_HEBREW_YEAR`
pub const MAX_CHESHVAN_DAY: u8 = 28;

/// Longest possible Hebrew month
pub const MAX_HEBREW_MONTH_DAYS: u8 = 30;
/// Shortest possible Hebrew month
pub const MIN_HEBREW_MONTH_DAYS: u8 = 29;

/// Years in one Metonic cycle
pub(crate) const METONIC_CYCLE_YEARS: i64 = 19;
/// Lunar months in one Metonic cycle
pub(crate) const METONIC_CYCLE_MONTHS: i64 = 235;
/// Number of leap years in one Metonic cycle
pub(crate) const LEAP_YEARS_PER_CYCLE: i64 = 7;

/// Offset between the Hebrew elapsed-day count and the absolute day count.
/// Day 1 is 0001-01-01 Gregorian.
pub const HEBREW_EPOCH: i64 = -1_373_429;

/// Gregorian to Hebrew year offset at January 1
pub(crate) const HEBREW_YEAR_OFFSET: i64 = 3760;

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';
