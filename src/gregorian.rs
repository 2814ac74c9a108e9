use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_ABSOLUTE_DAY, MAX_GREGORIAN_MONTH,
    MAX_GREGORIAN_YEAR, MIN_DAY,
};
use crate::error::CalendarError;
use crate::prelude::*;
use crate::types::Weekday;
use std::str::FromStr;

/// A proleptic Gregorian calendar date in the range `0001-01-01..=9999-12-31`.
///
/// Ordering follows the calendar, so comparing two dates compares the days
/// they denote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianDate` if the year is not in
    /// `1..=9999`, the month is not in `1..=12`, or the day does not exist in
    /// that month.
    pub const fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year == 0
            || year > MAX_GREGORIAN_YEAR
            || month == 0
            || month > MAX_GREGORIAN_MONTH
            || day < MIN_DAY
            || day > days_in_month(year, month)
        {
            return Err(CalendarError::InvalidGregorianDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Converts an absolute day (0001-01-01 is day 1) back into a date.
    ///
    /// # Errors
    /// Returns `CalendarError::AbsoluteDayOutOfRange` if the day is before
    /// 0001-01-01 or after 9999-12-31.
    pub fn from_absolute_day(absolute_day: i64) -> Result<Self, CalendarError> {
        if !(1..=MAX_ABSOLUTE_DAY).contains(&absolute_day) {
            return Err(CalendarError::AbsoluteDayOutOfRange(absolute_day));
        }
        let (year, month, day) = civil_from_absolute_day(absolute_day);
        Ok(Self { year, month, day })
    }

    /// Absolute day of this date, counting 0001-01-01 as day 1
    pub const fn to_absolute_day(self) -> i64 {
        absolute_day(self.year, self.month, self.day)
    }

    /// Day of the week of this date
    pub const fn weekday(self) -> Weekday {
        Weekday::from_absolute_day(self.to_absolute_day())
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// The following day, or `None` after 9999-12-31
    pub const fn succ(self) -> Option<Self> {
        if self.day < days_in_month(self.year, self.month) {
            return Some(Self {
                day: self.day + 1,
                ..self
            });
        }
        if self.month < MAX_GREGORIAN_MONTH {
            return Some(Self {
                month: self.month + 1,
                day: MIN_DAY,
                ..self
            });
        }
        if self.year >= MAX_GREGORIAN_YEAR {
            return None;
        }
        Some(Self {
            year:  self.year + 1,
            month: JANUARY,
            day:   MIN_DAY,
        })
    }

    /// The preceding day, or `None` before 0001-01-01
    pub const fn pred(self) -> Option<Self> {
        if self.day > MIN_DAY {
            return Some(Self {
                day: self.day - 1,
                ..self
            });
        }
        if self.month > JANUARY {
            let month = self.month - 1;
            return Some(Self {
                month,
                day: days_in_month(self.year, month),
                ..self
            });
        }
        if self.year <= 1 {
            return None;
        }
        Some(Self {
            year:  self.year - 1,
            month: MAX_GREGORIAN_MONTH,
            day:   days_in_month(self.year - 1, MAX_GREGORIAN_MONTH),
        })
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, CalendarError> {
        s.trim()
            .parse::<T>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed:?}"
            )));
        };
        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_GREGORIAN_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days in the year before the first of `month`
const fn days_before_month(year: u16, month: u8) -> i64 {
    let days = DAYS_BEFORE_MONTH[month as usize] as i64;
    if month > FEBRUARY && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Absolute day of a (validated) civil date
pub(crate) const fn absolute_day(year: u16, month: u8, day: u8) -> i64 {
    let prior_years = year as i64 - 1;
    day as i64
        + days_before_month(year, month)
        + 365 * prior_years       // days in prior years ignoring leap days
        + prior_years / 4         // Julian leap days
        - prior_years / 100       // minus century years
        + prior_years / 400 // plus years divisible by 400
}

/// Inverse of [`absolute_day`] for days in `1..=MAX_ABSOLUTE_DAY`.
///
/// Starts from an underestimate of the year and searches forward, then does
/// the same month by month.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_absolute_day(absolute: i64) -> (u16, u8, u8) {
    debug_assert!((1..=MAX_ABSOLUTE_DAY).contains(&absolute));

    // absolute / 366 never overshoots, and is at most 9977 here
    let mut year = (absolute / 366) as u16;
    while year < MAX_GREGORIAN_YEAR && absolute >= absolute_day(year + 1, JANUARY, MIN_DAY) {
        year += 1;
    }
    let day_of_year = absolute - absolute_day(year, JANUARY, MIN_DAY);
    let mut month = JANUARY;
    while month < MAX_GREGORIAN_MONTH && day_of_year >= days_before_month(year, month + 1) {
        month += 1;
    }
    let day = day_of_year - days_before_month(year, month) + 1;
    (year, month, day as u8)
}
