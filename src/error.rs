use crate::gregorian::GregorianDate;
use crate::prelude::*;

/// Error type for every fallible calendar operation.
///
/// Variants other than [`CalendarError::InternalLookupFailure`] describe bad
/// input. An internal lookup failure means the calendar arithmetic produced
/// a key no table knows about, which is a bug rather than a caller mistake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A Hebrew year, month or day is outside its legal range.
    #[error("Invalid Hebrew date {year}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year:   u16,
        month:  u8,
        day:    u8,
        reason: InvalidDateReason,
    },

    /// A Gregorian year, month or day is outside its legal range.
    #[error("Invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: u16, month: u8, day: u8 },

    /// An absolute day number has no representable Gregorian date.
    #[error("Absolute day {0} is outside 0001-01-01..=9999-12-31")]
    AbsoluteDayOutOfRange(i64),

    /// A molad hour, minute or chalakim value is out of range.
    #[error("Invalid molad {component}: {value}")]
    InvalidMoladComponent {
        component: MoladComponent,
        value:     u8,
    },

    /// A weekday number is not in 1..=7.
    #[error("Invalid weekday: {0} (must be 1-7)")]
    InvalidWeekday(u8),

    /// The query is defined only from a fixed start date onward.
    #[error("{date} precedes the supported range starting {start}")]
    PrecedesSupportedRange {
        date:  GregorianDate,
        start: GregorianDate,
    },

    /// A computed key matched no lookup table entry.
    #[error("Internal lookup failure: {0}")]
    InternalLookupFailure(String),

    /// Text could not be parsed as a numeric date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

impl CalendarError {
    /// Returns true if the error signals a broken calendar invariant rather
    /// than invalid input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InternalLookupFailure(_))
    }
}

/// Why a Hebrew date was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidDateReason {
    #[display(fmt = "year must be positive")]
    YearZero,
    #[display(fmt = "month must be 1-{last_month}")]
    MonthOutOfRange { last_month: u8 },
    #[display(fmt = "day must be 1-30")]
    DayOutOfRange,
    #[display(fmt = "month has only {days_in_month} days")]
    DayExceedsMonthLength { days_in_month: u8 },
    #[display(fmt = "dates before 18 Teves 3761 (0001-01-01) are not supported")]
    BeforeCalendarStart,
    #[display(fmt = "dates after 28 Cheshvan 13760 (9999-12-31) are not supported")]
    AfterCalendarEnd,
}

/// The molad component rejected by [`CalendarError::InvalidMoladComponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MoladComponent {
    #[display(fmt = "hours (must be 0-23)")]
    Hours,
    #[display(fmt = "minutes (must be 0-59)")]
    Minutes,
    #[display(fmt = "chalakim (must be 0-17)")]
    Chalakim,
}

impl MoladComponent {
    /// Largest legal value of the component
    pub const fn max(self) -> u8 {
        match self {
            Self::Hours => 23,
            Self::Minutes => 59,
            Self::Chalakim => 17,
        }
    }
}
