use crate::chalakim;
use crate::consts::{DATE_SEPARATOR, ELUL, HEBREW_EPOCH, MIN_DAY, NISSAN, TISHREI};
use crate::convert::{self, gregorian_to_hebrew};
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::molad::chalakim_since_molad_tohu;
use crate::types::{Kviah, MoladTime, Weekday};
use std::fmt;
use std::str::FromStr;

/// Hour of the molad day (counted from 18:00) at which the civil day changes
const MIDNIGHT_HOUR: u8 = 6;

/// A day in the Hebrew calendar, kept in step with its Gregorian equivalent.
///
/// Months are numbered from Nissan (1) so that Adar, or Adar I in a leap
/// year, is 12 and Adar II is 13. The Hebrew and Gregorian representations
/// always name the same day; every mutator updates both or neither.
///
/// A date may also carry the time of a molad when it was produced by
/// [`HebrewDate::molad`] or [`HebrewDate::with_molad`]. Any change of day
/// clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HebrewDate {
    // Field order drives the derived ordering: by day, then by molad time
    gregorian: GregorianDate,
    year:      u16,
    month:     u8,
    day:       u8,
    molad:     Option<MoladTime>,
}

impl HebrewDate {
    /// Creates a date from its Hebrew components.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for components that do not name a
    /// day on or after 18 Teves 3761, and
    /// `CalendarError::AbsoluteDayOutOfRange` for days after 9999-12-31.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let absolute = convert::hebrew_to_absolute_day(year, month, day)?;
        Ok(Self {
            gregorian: GregorianDate::from_absolute_day(absolute)?,
            year,
            month,
            day,
            molad: None,
        })
    }

    /// Creates a date carrying a molad time.
    ///
    /// # Errors
    /// As [`HebrewDate::new`], plus `CalendarError::InvalidMoladComponent`
    /// for an out of range hour, minute or chelek.
    pub fn with_molad(
        year: u16,
        month: u8,
        day: u8,
        hours: u8,
        minutes: u8,
        chalakim: u8,
    ) -> Result<Self, CalendarError> {
        let molad = MoladTime::new(hours, minutes, chalakim)?;
        Ok(Self {
            molad: Some(molad),
            ..Self::new(year, month, day)?
        })
    }

    /// The Hebrew date of a Gregorian date
    pub fn from_gregorian(gregorian: GregorianDate) -> Self {
        let (year, month, day) = gregorian_to_hebrew(gregorian);
        Self {
            gregorian,
            year,
            month,
            day,
            molad: None,
        }
    }

    /// Creates a date from Gregorian components.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianDate` for a bad date.
    pub fn from_gregorian_ymd(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self::from_gregorian(GregorianDate::new(year, month, day)?))
    }

    /// Creates a date from an absolute day (0001-01-01 is day 1).
    ///
    /// # Errors
    /// Returns `CalendarError::AbsoluteDayOutOfRange` outside
    /// `0001-01-01..=9999-12-31`.
    pub fn from_absolute_day(absolute_day: i64) -> Result<Self, CalendarError> {
        Ok(Self::from_gregorian(GregorianDate::from_absolute_day(absolute_day)?))
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month number, Nissan = 1 and Adar II = 13
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    /// Molad time carried by this date, if any
    #[inline]
    pub const fn molad_time(&self) -> Option<MoladTime> {
        self.molad
    }

    pub const fn absolute_day(&self) -> i64 {
        self.gregorian.to_absolute_day()
    }

    pub const fn day_of_week(&self) -> Weekday {
        self.gregorian.weekday()
    }

    pub const fn is_leap_year(&self) -> bool {
        convert::is_leap_year(self.year)
    }

    pub fn days_in_year(&self) -> i64 {
        convert::days_in_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        convert::days_in_month(self.year, self.month)
    }

    pub fn kviah(&self) -> Kviah {
        convert::year_kviah(self.year)
    }

    pub fn is_cheshvan_long(&self) -> bool {
        convert::is_cheshvan_long(self.year)
    }

    pub fn is_kislev_short(&self) -> bool {
        convert::is_kislev_short(self.year)
    }

    /// Advances one day.
    ///
    /// # Errors
    /// Returns `CalendarError::AbsoluteDayOutOfRange` on 9999-12-31, leaving
    /// the date unchanged.
    pub fn forward(&mut self) -> Result<(), CalendarError> {
        let gregorian = self
            .gregorian
            .succ()
            .ok_or(CalendarError::AbsoluteDayOutOfRange(self.absolute_day() + 1))?;

        if self.day < self.days_in_month() {
            self.day += 1;
        } else {
            if self.month == ELUL {
                self.year += 1;
                self.month = TISHREI;
            } else if self.month == convert::last_month_of_year(self.year) {
                self.month = NISSAN;
            } else {
                self.month += 1;
            }
            self.day = MIN_DAY;
        }
        self.gregorian = gregorian;
        self.molad = None;
        Ok(())
    }

    /// Steps back one day.
    ///
    /// # Errors
    /// Returns `CalendarError::AbsoluteDayOutOfRange` on 18 Teves 3761
    /// (0001-01-01), leaving the date unchanged.
    pub fn back(&mut self) -> Result<(), CalendarError> {
        let gregorian = self
            .gregorian
            .pred()
            .ok_or(CalendarError::AbsoluteDayOutOfRange(self.absolute_day() - 1))?;

        if self.day > MIN_DAY {
            self.day -= 1;
        } else {
            if self.month == TISHREI {
                self.year -= 1;
                self.month = ELUL;
            } else if self.month == NISSAN {
                self.month = convert::last_month_of_year(self.year);
            } else {
                self.month -= 1;
            }
            self.day = self.days_in_month();
        }
        self.gregorian = gregorian;
        self.molad = None;
        Ok(())
    }

    /// Moves to a Gregorian date
    pub fn set_gregorian(&mut self, gregorian: GregorianDate) {
        *self = Self::from_gregorian(gregorian);
    }

    /// Moves to a Hebrew date.
    ///
    /// # Errors
    /// As [`HebrewDate::new`]. The date is left unchanged on failure.
    pub fn set_hebrew(&mut self, year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
        *self = Self::new(year, month, day)?;
        Ok(())
    }

    /// Same month and day in another year.
    ///
    /// # Errors
    /// As [`HebrewDate::new`], e.g. for Adar II in a common year.
    pub fn with_year(&self, year: u16) -> Result<Self, CalendarError> {
        Self::new(year, self.month, self.day)
    }

    /// # Errors
    /// As [`HebrewDate::new`].
    pub fn with_month(&self, month: u8) -> Result<Self, CalendarError> {
        Self::new(self.year, month, self.day)
    }

    /// # Errors
    /// As [`HebrewDate::new`].
    pub fn with_day(&self, day: u8) -> Result<Self, CalendarError> {
        Self::new(self.year, self.month, day)
    }

    /// The molad of this date's month, as the civil day it falls on with its
    /// time attached.
    ///
    /// Molad hours count from 18:00 of the preceding evening. Hours 6 and
    /// later fall after midnight, so they move to the next civil day and are
    /// rebased to a midnight clock.
    ///
    /// # Errors
    /// Returns `CalendarError::AbsoluteDayOutOfRange` when the molad falls
    /// outside the supported Gregorian range.
    pub fn molad(&self) -> Result<Self, CalendarError> {
        let (days, parts) = chalakim::split_days(chalakim_since_molad_tohu(self.year, self.month));
        let time = MoladTime::from_day_chalakim(parts);

        let mut absolute = days + HEBREW_EPOCH;
        if time.hours() >= MIDNIGHT_HOUR {
            absolute += 1;
        }
        let time = time.with_hours((time.hours() + 18) % 24);

        Ok(Self {
            molad: Some(time),
            ..Self::from_absolute_day(absolute)?
        })
    }
}

impl From<GregorianDate> for HebrewDate {
    fn from(gregorian: GregorianDate) -> Self {
        Self::from_gregorian(gregorian)
    }
}

impl fmt::Display for HebrewDate {
    /// Numeric form `year-month-day`, e.g. `5771-12-29`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{:02}{sep}{:02}",
            self.year,
            self.month,
            self.day,
            sep = DATE_SEPARATOR
        )
    }
}

impl FromStr for HebrewDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CalendarError::InvalidFormat(trimmed.to_owned());

        let mut parts = trimmed.split(DATE_SEPARATOR);
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Self::new(
            year.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
        )
    }
}

impl serde::Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
