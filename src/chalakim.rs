//! Fixed-point time arithmetic in chalakim (parts).
//!
//! An hour holds 1080 chalakim, so a minute holds 18. All molad arithmetic is
//! carried out in whole chalakim to stay exact.

/// Chalakim in one minute
pub const CHALAKIM_PER_MINUTE: i64 = 18;
/// Chalakim in one hour
pub const CHALAKIM_PER_HOUR: i64 = 1080;
/// Chalakim in one day (24 * 1080)
pub const CHALAKIM_PER_DAY: i64 = 25_920;
/// Chalakim in one mean synodic month: 29 days, 12 hours and 793 parts
pub const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Chalakim from the start of the epoch week to Molad Tohu (BaHaRaD:
/// day 1, 5 hours, 204 parts)
pub const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Splits a chalakim count into whole days and the time of day, returned as
/// `(days, hours, minutes, chalakim)`.
///
/// The time of day is counted from the start of the calendar day, which in
/// molad reckoning is 18:00 of the preceding civil evening.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn split_chalakim(total: i64) -> (i64, u8, u8, u8) {
    let (days, parts) = split_days(total);
    let hours = parts / CHALAKIM_PER_HOUR;
    let parts = parts % CHALAKIM_PER_HOUR;
    (
        days,
        hours as u8,
        (parts / CHALAKIM_PER_MINUTE) as u8,
        (parts % CHALAKIM_PER_MINUTE) as u8,
    )
}

/// Splits a chalakim count into whole days and the leftover chalakim of the
/// last day.
pub(crate) const fn split_days(total: i64) -> (i64, i64) {
    (
        total.div_euclid(CHALAKIM_PER_DAY),
        total.rem_euclid(CHALAKIM_PER_DAY),
    )
}

/// Builds a chalakim count back up from `(hours, minutes, chalakim)`.
pub const fn to_chalakim(hours: u8, minutes: u8, chalakim: u8) -> i64 {
    hours as i64 * CHALAKIM_PER_HOUR + minutes as i64 * CHALAKIM_PER_MINUTE + chalakim as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_consistent() {
        assert_eq!(CHALAKIM_PER_HOUR, 60 * CHALAKIM_PER_MINUTE);
        assert_eq!(CHALAKIM_PER_DAY, 24 * CHALAKIM_PER_HOUR);
        assert_eq!(
            CHALAKIM_PER_MONTH,
            (29 * 24 + 12) * CHALAKIM_PER_HOUR + 793
        );
        assert_eq!(CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY + 5 * CHALAKIM_PER_HOUR + 204);
    }

    #[test]
    fn test_split_zero() {
        assert_eq!(split_chalakim(0), (0, 0, 0, 0));
    }

    #[test]
    fn test_split_molad_tohu() {
        // BaHaRaD: day 1, 5 hours, 204 parts = 11 minutes and 6 parts
        assert_eq!(split_chalakim(CHALAKIM_MOLAD_TOHU), (1, 5, 11, 6));
    }

    #[test]
    fn test_split_synodic_month() {
        // 793 parts = 44 minutes and 1 part
        assert_eq!(split_chalakim(CHALAKIM_PER_MONTH), (29, 12, 44, 1));
    }

    #[test]
    fn test_split_dechiya_thresholds() {
        assert_eq!(split_chalakim(19_440), (0, 18, 0, 0));
        assert_eq!(split_chalakim(9924), (0, 9, 11, 6));
        assert_eq!(split_chalakim(16_789), (0, 15, 32, 13));
    }

    #[test]
    fn test_split_then_rebuild() {
        for total in [1_i64, 17, 18, 1079, 1080, 25_919, 25_920, 54_629_750_167] {
            let (days, h, m, c) = split_chalakim(total);
            assert_eq!(
                days * CHALAKIM_PER_DAY + to_chalakim(h, m, c),
                total,
                "total {total} did not rebuild"
            );
            assert!(h < 24 && m < 60 && c < 18);
        }
    }
}
