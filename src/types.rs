use crate::chalakim::{self, CHALAKIM_PER_DAY};
use crate::error::{CalendarError, MoladComponent};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, numbered the way the Hebrew calendar counts them:
/// Sunday is 1 and Shabbos (Saturday) is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// Creates a Weekday from its 1-based number (Sunday = 1)
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if the value is 0 or > 7.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        Ok(match value {
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            6 => Self::Friday,
            7 => Self::Saturday,
            _ => return Err(CalendarError::InvalidWeekday(value)),
        })
    }

    /// Weekday of an absolute day. Absolute day 1 (0001-01-01) is a Monday.
    pub const fn from_absolute_day(absolute_day: i64) -> Self {
        match absolute_day.rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the 1-based number of the weekday
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Returns true for Shabbos
    #[inline]
    pub const fn is_shabbos(self) -> bool {
        matches!(self, Self::Saturday)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.get()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Classification of a Hebrew year by the combined length of Cheshvan and
/// Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kviah {
    /// Chaseirim: Cheshvan and Kislev both have 29 days (58)
    #[display(fmt = "deficient")]
    Deficient,
    /// Kesidran: Cheshvan 29, Kislev 30 (59)
    #[display(fmt = "regular")]
    Regular,
    /// Shleimim: Cheshvan and Kislev both have 30 days (60)
    #[display(fmt = "complete")]
    Complete,
}

impl Kviah {
    /// Classifies a year from its length in days (353-355 or 383-385)
    pub const fn from_year_length(days_in_year: i64) -> Self {
        match days_in_year % 10 {
            5 => Self::Complete,
            3 => Self::Deficient,
            _ => Self::Regular,
        }
    }

    /// Days in Cheshvan for a year of this kind
    pub const fn cheshvan_days(self) -> u8 {
        match self {
            Self::Complete => 30,
            Self::Deficient | Self::Regular => 29,
        }
    }

    /// Days in Kislev for a year of this kind
    pub const fn kislev_days(self) -> u8 {
        match self {
            Self::Deficient => 29,
            Self::Regular | Self::Complete => 30,
        }
    }
}

/// Time of a molad within its day, in hours, minutes and chalakim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "MoladTimeParts", into = "MoladTimeParts")]
pub struct MoladTime {
    hours:    u8,
    minutes:  u8,
    chalakim: u8,
}

impl MoladTime {
    /// Creates a new MoladTime, validating every component.
    /// Chalakim beyond 17 must be carried into minutes (793 parts is 44
    /// minutes and 1 chelek).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMoladComponent` for hours > 23,
    /// minutes > 59 or chalakim > 17.
    pub const fn new(hours: u8, minutes: u8, chalakim: u8) -> Result<Self, CalendarError> {
        if hours > MoladComponent::Hours.max() {
            return Err(CalendarError::InvalidMoladComponent {
                component: MoladComponent::Hours,
                value:     hours,
            });
        }
        if minutes > MoladComponent::Minutes.max() {
            return Err(CalendarError::InvalidMoladComponent {
                component: MoladComponent::Minutes,
                value:     minutes,
            });
        }
        if chalakim > MoladComponent::Chalakim.max() {
            return Err(CalendarError::InvalidMoladComponent {
                component: MoladComponent::Chalakim,
                value:     chalakim,
            });
        }
        Ok(Self {
            hours,
            minutes,
            chalakim,
        })
    }

    /// Builds the time of day from a chalakim count, discarding whole days
    pub const fn from_day_chalakim(parts: i64) -> Self {
        let (_, hours, minutes, chalakim) = chalakim::split_chalakim(parts.rem_euclid(CHALAKIM_PER_DAY));
        Self {
            hours,
            minutes,
            chalakim,
        }
    }

    /// Total chalakim since the start of the day
    pub const fn to_chalakim(self) -> i64 {
        chalakim::to_chalakim(self.hours, self.minutes, self.chalakim)
    }

    #[inline]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    #[inline]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn chalakim(self) -> u8 {
        self.chalakim
    }

    pub(crate) const fn with_hours(self, hours: u8) -> Self {
        Self { hours, ..self }
    }
}

/// Unchecked wire form of [`MoladTime`]
#[derive(Serialize, Deserialize)]
struct MoladTimeParts {
    hours:    u8,
    minutes:  u8,
    chalakim: u8,
}

impl TryFrom<MoladTimeParts> for MoladTime {
    type Error = CalendarError;

    fn try_from(parts: MoladTimeParts) -> Result<Self, Self::Error> {
        Self::new(parts.hours, parts.minutes, parts.chalakim)
    }
}

impl From<MoladTime> for MoladTimeParts {
    fn from(time: MoladTime) -> Self {
        Self {
            hours:    time.hours,
            minutes:  time.minutes,
            chalakim: time.chalakim,
        }
    }
}

impl fmt::Display for MoladTime {
    /// Formats as `hours:minutes:chalakim`, e.g. `05:49:00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.chalakim)
    }
}
