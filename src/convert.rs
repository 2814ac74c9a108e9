//! Hebrew year and month arithmetic, and conversion between Hebrew dates and
//! absolute day numbers.

use crate::consts::{
    ADAR, ADAR_II, CHESHVAN, ELUL, HEBREW_EPOCH, HEBREW_YEAR_OFFSET, IYAR, KISLEV,
    MAX_CHESHVAN_DAY, MAX_HEBREW_MONTH_DAYS, MAX_HEBREW_YEAR, MIN_DAY, MIN_HEBREW_MONTH_DAYS,
    MIN_HEBREW_YEAR, MIN_TEVES_DAY, NISSAN, TAMMUZ, TEVES, TISHREI,
};
use crate::error::{CalendarError, InvalidDateReason};
use crate::gregorian::GregorianDate;
use crate::molad::{elapsed_days, elapsed_days_for_tishrei};
use crate::types::Kviah;

/// Returns true for the 7 leap years of each 19 year cycle (years 3, 6, 8,
/// 11, 14, 17 and 19).
pub const fn is_leap_year(year: u16) -> bool {
    (7 * year as u32 + 1) % 19 < 7
}

/// Length of `year` in days: 353-355 for common years, 383-385 for leap years
pub fn days_in_year(year: u16) -> i64 {
    let year = u32::from(year);
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Kviah of `year`, from its length
pub fn year_kviah(year: u16) -> Kviah {
    Kviah::from_year_length(days_in_year(year))
}

/// Cheshvan has 30 days only in complete years
pub fn is_cheshvan_long(year: u16) -> bool {
    year_kviah(year) == Kviah::Complete
}

/// Kislev has 29 days only in deficient years
pub fn is_kislev_short(year: u16) -> bool {
    year_kviah(year) == Kviah::Deficient
}

/// Adar II in leap years, Adar otherwise
pub const fn last_month_of_year(year: u16) -> u8 {
    if is_leap_year(year) { ADAR_II } else { ADAR }
}

/// Days in `month` of `year`
pub fn days_in_month(year: u16, month: u8) -> u8 {
    month_length(month, is_leap_year(year), year_kviah(year))
}

/// Month length once the year's shape is known
const fn month_length(month: u8, leap: bool, kviah: Kviah) -> u8 {
    match month {
        IYAR | TAMMUZ | ELUL | TEVES | ADAR_II => MIN_HEBREW_MONTH_DAYS,
        CHESHVAN => kviah.cheshvan_days(),
        KISLEV => kviah.kislev_days(),
        ADAR if !leap => MIN_HEBREW_MONTH_DAYS,
        _ => MAX_HEBREW_MONTH_DAYS,
    }
}

/// Months of `year` in calendar order, starting from Tishrei
fn months_from_tishrei(leap: bool) -> impl Iterator<Item = u8> {
    let last = if leap { ADAR_II } else { ADAR };
    (TISHREI..=last).chain(NISSAN..TISHREI)
}

/// Checks that `(year, month, day)` names a real day between 18 Teves 3761
/// and 28 Cheshvan 13760.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` describing the first problem found.
pub fn validate(year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
    let invalid = |reason| CalendarError::InvalidDate {
        year,
        month,
        day,
        reason,
    };

    if year == 0 {
        return Err(invalid(InvalidDateReason::YearZero));
    }
    if year > MAX_HEBREW_YEAR {
        return Err(invalid(InvalidDateReason::AfterCalendarEnd));
    }
    let last_month = last_month_of_year(year);
    if !(NISSAN..=last_month).contains(&month) {
        return Err(invalid(InvalidDateReason::MonthOutOfRange { last_month }));
    }
    if !(MIN_DAY..=MAX_HEBREW_MONTH_DAYS).contains(&day) {
        return Err(invalid(InvalidDateReason::DayOutOfRange));
    }
    if day > MIN_HEBREW_MONTH_DAYS {
        let days_in_month = days_in_month(year, month);
        if day > days_in_month {
            return Err(invalid(InvalidDateReason::DayExceedsMonthLength { days_in_month }));
        }
    }
    let before_start = year < MIN_HEBREW_YEAR
        || (year == MIN_HEBREW_YEAR
            && ((TISHREI..TEVES).contains(&month) || (month == TEVES && day < MIN_TEVES_DAY)));
    if before_start {
        return Err(invalid(InvalidDateReason::BeforeCalendarStart));
    }
    // Tishrei and Cheshvan open the year, every other month comes after them
    let after_end = year == MAX_HEBREW_YEAR
        && !(month == TISHREI || (month == CHESHVAN && day <= MAX_CHESHVAN_DAY));
    if after_end {
        return Err(invalid(InvalidDateReason::AfterCalendarEnd));
    }
    Ok(())
}

/// Absolute day (0001-01-01 Gregorian is day 1) of a Hebrew date.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date fails [`validate`].
pub fn hebrew_to_absolute_day(year: u16, month: u8, day: u8) -> Result<i64, CalendarError> {
    validate(year, month, day)?;
    Ok(absolute_day_unchecked(year, month, day))
}

/// Absolute day of a date already known to be valid.
pub(crate) fn absolute_day_unchecked(year: u16, month: u8, day: u8) -> i64 {
    let leap = is_leap_year(year);
    let kviah = year_kviah(year);
    let days_before: i64 = months_from_tishrei(leap)
        .take_while(|&m| m != month)
        .map(|m| i64::from(month_length(m, leap, kviah)))
        .sum();

    i64::from(day) + days_before + elapsed_days_for_tishrei(year) + HEBREW_EPOCH
}

/// Absolute day of 1 Tishrei of `year`
fn rosh_hashana_absolute_day(year: u16) -> i64 {
    elapsed_days_for_tishrei(year) + HEBREW_EPOCH + 1
}

/// Hebrew `(year, month, day)` of an absolute day.
///
/// # Errors
/// Returns `CalendarError::AbsoluteDayOutOfRange` if the day has no
/// Gregorian date in `0001-01-01..=9999-12-31`.
pub fn absolute_day_to_hebrew(absolute_day: i64) -> Result<(u16, u8, u8), CalendarError> {
    let gregorian = GregorianDate::from_absolute_day(absolute_day)?;
    Ok(gregorian_to_hebrew(gregorian))
}

/// Hebrew `(year, month, day)` of a Gregorian date. Every Gregorian date has
/// one, so this cannot fail.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn gregorian_to_hebrew(gregorian: GregorianDate) -> (u16, u8, u8) {
    let absolute = gregorian.to_absolute_day();

    // 1 January always falls in the Hebrew year (Gregorian year + 3760), so
    // the estimate can only be behind
    let mut year = (i64::from(gregorian.year()) + HEBREW_YEAR_OFFSET) as u16;
    while absolute >= rosh_hashana_absolute_day(year + 1) {
        year += 1;
    }

    let leap = is_leap_year(year);
    let kviah = year_kviah(year);
    let mut remaining = absolute - rosh_hashana_absolute_day(year);
    let mut month = TISHREI;
    for m in months_from_tishrei(leap) {
        month = m;
        let length = i64::from(month_length(m, leap, kviah));
        if remaining < length {
            break;
        }
        remaining -= length;
    }

    // remaining < 30 once the walk stops inside a month
    (year, month, remaining as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AV, SHEVAT, SIVAN};

    #[test]
    fn test_is_leap_year() {
        let leap_years_in_cycle: Vec<u16> = (1..=19).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leap_years_in_cycle, vec![3, 6, 8, 11, 14, 17, 19]);

        assert!(is_leap_year(5771));
        assert!(is_leap_year(5784));
        assert!(!is_leap_year(5778));
        assert!(!is_leap_year(5785));
    }

    #[test]
    fn test_days_in_year() {
        struct TestCase {
            year:  u16,
            days:  i64,
            kviah: Kviah,
        }

        let cases = [
            TestCase { year: 3762, days: 383, kviah: Kviah::Deficient },
            TestCase { year: 5771, days: 385, kviah: Kviah::Complete },
            TestCase { year: 5778, days: 354, kviah: Kviah::Regular },
            TestCase { year: 5780, days: 355, kviah: Kviah::Complete },
            TestCase { year: 5784, days: 383, kviah: Kviah::Deficient },
            TestCase { year: 5786, days: 354, kviah: Kviah::Regular },
        ];

        for case in &cases {
            assert_eq!(days_in_year(case.year), case.days, "length of {}", case.year);
            assert_eq!(year_kviah(case.year), case.kviah, "kviah of {}", case.year);
        }
    }

    #[test]
    fn test_year_lengths_are_legal() {
        for year in MIN_HEBREW_YEAR..=13_760 {
            let days = days_in_year(year);
            let legal: &[i64] = if is_leap_year(year) { &[383, 384, 385] } else { &[353, 354, 355] };
            assert!(legal.contains(&days), "year {year} has {days} days");
        }
    }

    #[test]
    fn test_year_shape_of_last_u16_year() {
        let days = days_in_year(u16::MAX);
        assert!((353..=385).contains(&days));
        assert!(days_in_month(u16::MAX, CHESHVAN) >= MIN_HEBREW_MONTH_DAYS);
    }

    #[test]
    fn test_cheshvan_kislev() {
        assert!(is_cheshvan_long(5771));
        assert!(!is_kislev_short(5771));
        assert!(is_kislev_short(5784));
        assert!(!is_cheshvan_long(5784));
        assert_eq!(days_in_month(5784, KISLEV), 29);
        assert_eq!(days_in_month(5771, CHESHVAN), 30);
        assert_eq!(days_in_month(5778, CHESHVAN), 29);
        assert_eq!(days_in_month(5778, KISLEV), 30);
    }

    #[test]
    fn test_days_in_month_fixed_lengths() {
        for month in [IYAR, TAMMUZ, ELUL, TEVES] {
            assert_eq!(days_in_month(5784, month), 29, "month {month}");
        }
        for month in [NISSAN, SIVAN, AV, TISHREI, SHEVAT] {
            assert_eq!(days_in_month(5784, month), 30, "month {month}");
        }
        assert_eq!(days_in_month(5784, ADAR), 30);
        assert_eq!(days_in_month(5784, ADAR_II), 29);
        assert_eq!(days_in_month(5785, ADAR), 29);
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in [5771_u16, 5778, 5780, 5784, 5785, 5786] {
            let total: i64 = (NISSAN..=last_month_of_year(year))
                .map(|m| i64::from(days_in_month(year, m)))
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn test_last_month_of_year() {
        assert_eq!(last_month_of_year(5784), ADAR_II);
        assert_eq!(last_month_of_year(5785), ADAR);
    }

    #[test]
    fn test_hebrew_to_absolute_day() {
        assert_eq!(hebrew_to_absolute_day(3761, TEVES, 18).unwrap(), 1);
        assert_eq!(hebrew_to_absolute_day(5771, ADAR, 29).unwrap(), 734_201);
        assert_eq!(
            hebrew_to_absolute_day(13_760, CHESHVAN, 28).unwrap(),
            crate::consts::MAX_ABSOLUTE_DAY
        );
    }

    #[test]
    fn test_hebrew_to_absolute_day_invalid() {
        struct TestCase {
            year:   u16,
            month:  u8,
            day:    u8,
            reason: InvalidDateReason,
        }

        let cases = [
            TestCase { year: 0, month: 1, day: 1, reason: InvalidDateReason::YearZero },
            TestCase {
                year:   5785,
                month:  13,
                day:    1,
                reason: InvalidDateReason::MonthOutOfRange { last_month: 12 },
            },
            TestCase {
                year:   5784,
                month:  0,
                day:    1,
                reason: InvalidDateReason::MonthOutOfRange { last_month: 13 },
            },
            TestCase { year: 5784, month: 1, day: 0, reason: InvalidDateReason::DayOutOfRange },
            TestCase { year: 5784, month: 1, day: 31, reason: InvalidDateReason::DayOutOfRange },
            TestCase {
                year:   5785,
                month:  ADAR,
                day:    30,
                reason: InvalidDateReason::DayExceedsMonthLength { days_in_month: 29 },
            },
            TestCase {
                year:   5784,
                month:  KISLEV,
                day:    30,
                reason: InvalidDateReason::DayExceedsMonthLength { days_in_month: 29 },
            },
            TestCase { year: 3760, month: 1, day: 1, reason: InvalidDateReason::BeforeCalendarStart },
            TestCase { year: 3761, month: TISHREI, day: 1, reason: InvalidDateReason::BeforeCalendarStart },
            TestCase { year: 3761, month: TEVES, day: 17, reason: InvalidDateReason::BeforeCalendarStart },
            TestCase { year: 13_760, month: CHESHVAN, day: 29, reason: InvalidDateReason::AfterCalendarEnd },
            TestCase { year: 13_760, month: NISSAN, day: 1, reason: InvalidDateReason::AfterCalendarEnd },
            TestCase { year: 13_761, month: TISHREI, day: 1, reason: InvalidDateReason::AfterCalendarEnd },
            TestCase { year: 20_000, month: TISHREI, day: 1, reason: InvalidDateReason::AfterCalendarEnd },
            TestCase { year: u16::MAX, month: CHESHVAN, day: 30, reason: InvalidDateReason::AfterCalendarEnd },
        ];

        for case in &cases {
            match hebrew_to_absolute_day(case.year, case.month, case.day) {
                Err(CalendarError::InvalidDate { reason, .. }) => assert_eq!(
                    reason, case.reason,
                    "{}-{}-{}",
                    case.year, case.month, case.day
                ),
                other => panic!(
                    "{}-{}-{}: expected InvalidDate, got {other:?}",
                    case.year, case.month, case.day
                ),
            }
        }
    }

    #[test]
    fn test_absolute_day_to_hebrew() {
        assert_eq!(absolute_day_to_hebrew(1).unwrap(), (3761, TEVES, 18));
        assert_eq!(absolute_day_to_hebrew(734_201).unwrap(), (5771, ADAR, 29));
        assert_eq!(
            absolute_day_to_hebrew(crate::consts::MAX_ABSOLUTE_DAY).unwrap(),
            (13_760, CHESHVAN, 28)
        );
        assert!(matches!(
            absolute_day_to_hebrew(0),
            Err(CalendarError::AbsoluteDayOutOfRange(0))
        ));
    }

    #[test]
    fn test_gregorian_to_hebrew() {
        struct TestCase {
            gregorian: (u16, u8, u8),
            hebrew:    (u16, u8, u8),
        }

        let cases = [
            TestCase { gregorian: (2017, 6, 18), hebrew: (5777, SIVAN, 24) },
            TestCase { gregorian: (2017, 11, 27), hebrew: (5778, KISLEV, 9) },
            TestCase { gregorian: (2017, 11, 28), hebrew: (5778, KISLEV, 10) },
            TestCase { gregorian: (2013, 11, 28), hebrew: (5774, KISLEV, 25) },
            TestCase { gregorian: (2023, 9, 16), hebrew: (5784, TISHREI, 1) },
            TestCase { gregorian: (2024, 3, 24), hebrew: (5784, ADAR_II, 14) },
            TestCase { gregorian: (2024, 4, 23), hebrew: (5784, NISSAN, 15) },
        ];

        for case in &cases {
            let (y, m, d) = case.gregorian;
            let gregorian = GregorianDate::new(y, m, d).unwrap();
            assert_eq!(gregorian_to_hebrew(gregorian), case.hebrew, "{gregorian}");
        }
    }

    #[test]
    fn test_round_trip_through_year_boundaries() {
        // Rosh Hashana 5784 through the end of 5785 covers a leap year and a
        // common year
        let start = hebrew_to_absolute_day(5784, TISHREI, 1).unwrap();
        let end = hebrew_to_absolute_day(5786, TISHREI, 1).unwrap();
        assert_eq!(end - start, 383 + 355);
        for abs in start..end {
            let (y, m, d) = absolute_day_to_hebrew(abs).unwrap();
            assert_eq!(hebrew_to_absolute_day(y, m, d).unwrap(), abs, "{y}-{m}-{d}");
        }
    }
}
