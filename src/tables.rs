//! Fixed lookup data: weekly parsha sequences, holiday tables and the Daf
//! Yomi folio counts.
//!
//! Parsha sequences hold one entry per Shabbos counted from the first Shabbos
//! on or after Rosh Hashana. A number is an index into the 54 parshiyos (53
//! and up name the combined readings); `_` is a Shabbos with no parsha of its
//! own because a holiday reading replaces it.

use crate::calendar::Holiday;
use crate::consts::{
    ADAR_II, AV, ELUL, IYAR, KISLEV, NISSAN, SHEVAT, SIVAN, TAMMUZ, TEVES, TISHREI,
};
use crate::types::{Kviah, Weekday};

macro_rules! parsha {
    (@entry _) => {
        None
    };
    (@entry $index:literal) => {
        Some($index)
    };
    ($($entry:tt)*) => {
        [$(parsha!(@entry $entry)),*]
    };
}

/// Key selecting a parsha sequence: how Rosh Hashana falls and how long the
/// year is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ParshaKey {
    pub rosh_hashana: Weekday,
    pub kviah:        Kviah,
    pub leap:         bool,
}

/// The parsha sequence for a year outside Israel
pub(crate) fn diaspora_parsha_sequence(key: ParshaKey) -> Option<&'static [Option<u8>]> {
    use Kviah::{Complete, Deficient, Regular};
    use Weekday::{Monday, Saturday, Thursday, Tuesday};

    let sequence: &'static [Option<u8>] = match (key.rosh_hashana, key.kviah, key.leap) {
        (Monday, Deficient, false) => &MONDAY_DEFICIENT,
        (Monday, Complete, false) | (Tuesday, Regular, false) => &MONDAY_COMPLETE,
        (Thursday, Regular, false) => &THURSDAY_REGULAR,
        (Thursday, Complete, false) => &THURSDAY_COMPLETE,
        (Saturday, Deficient, false) => &SATURDAY_DEFICIENT,
        (Saturday, Complete, false) => &SATURDAY_COMPLETE,
        (Monday, Deficient, true) => &MONDAY_DEFICIENT_LEAP,
        (Monday, Complete, true) | (Tuesday, Regular, true) => &MONDAY_COMPLETE_LEAP,
        (Thursday, Deficient, true) => &THURSDAY_DEFICIENT_LEAP,
        (Thursday, Complete, true) => &THURSDAY_COMPLETE_LEAP,
        (Saturday, Deficient, true) => &SATURDAY_DEFICIENT_LEAP,
        (Saturday, Complete, true) => &SATURDAY_COMPLETE_LEAP,
        _ => return None,
    };
    Some(sequence)
}

/// The parsha sequence for a year in Israel, where the second day of a
/// festival is an ordinary Shabbos
pub(crate) fn israel_parsha_sequence(key: ParshaKey) -> Option<&'static [Option<u8>]> {
    use Kviah::{Complete, Deficient, Regular};
    use Weekday::{Monday, Saturday, Thursday, Tuesday};

    let sequence: &'static [Option<u8>] = match (key.rosh_hashana, key.kviah, key.leap) {
        (Monday, Deficient | Complete, false) | (Tuesday, Regular, false) => &MONDAY_DEFICIENT,
        (Thursday, Regular, false) => &THURSDAY_REGULAR_ISRAEL,
        (Thursday, Complete, false) => &THURSDAY_COMPLETE,
        (Saturday, Deficient, false) => &SATURDAY_DEFICIENT,
        (Saturday, Complete, false) => &SATURDAY_COMPLETE,
        (Monday, Deficient, true) => &MONDAY_DEFICIENT_LEAP_ISRAEL,
        (Monday, Complete, true) | (Tuesday, Regular, true) => &MONDAY_COMPLETE_LEAP_ISRAEL,
        (Thursday, Deficient, true) => &THURSDAY_DEFICIENT_LEAP,
        (Thursday, Complete, true) => &THURSDAY_COMPLETE_LEAP,
        (Saturday, Deficient | Complete, true) => &SATURDAY_DEFICIENT_LEAP,
        _ => return None,
    };
    Some(sequence)
}

static SATURDAY_DEFICIENT: [Option<u8>; 51] = parsha![
    _ 52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11
    12 13 14 15 16 17 18 19 20 53 23 24 _ 25 54 55
    30 56 33 34 35 36 37 38 39 40 58 43 44 45 46 47
    48 49 50
];

static SATURDAY_COMPLETE: [Option<u8>; 51] = parsha![
    _ 52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11
    12 13 14 15 16 17 18 19 20 53 23 24 _ 25 54 55
    30 56 33 34 35 36 37 38 39 40 58 43 44 45 46 47
    48 49 59
];

static MONDAY_DEFICIENT: [Option<u8>; 50] = parsha![
    51 52 _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 53 23 24 _ 25 54 55 30
    56 33 34 35 36 37 38 39 40 58 43 44 45 46 47 48
    49 59
];

static MONDAY_COMPLETE: [Option<u8>; 50] = parsha![
    51 52 _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 53 23 24 _ 25 54 55 30
    56 33 _ 34 35 36 37 57 40 58 43 44 45 46 47 48
    49 59
];

static THURSDAY_REGULAR: [Option<u8>; 51] = parsha![
    52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 53 23 24 _ _ 25 54 55
    30 56 33 34 35 36 37 38 39 40 58 43 44 45 46 47
    48 49 50
];

static THURSDAY_REGULAR_ISRAEL: [Option<u8>; 51] = parsha![
    52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 53 23 24 _ 25 54 55 30
    31 32 33 34 35 36 37 38 39 40 58 43 44 45 46 47
    48 49 50
];

static THURSDAY_COMPLETE: [Option<u8>; 51] = parsha![
    52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 21 22 23 24 _ 25 54 55
    30 56 33 34 35 36 37 38 39 40 58 43 44 45 46 47
    48 49 50
];

static SATURDAY_DEFICIENT_LEAP: [Option<u8>; 55] = parsha![
    _ 52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11
    12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27
    _ 28 29 30 31 32 33 34 35 36 37 38 39 40 58 43
    44 45 46 47 48 49 59
];

static SATURDAY_COMPLETE_LEAP: [Option<u8>; 55] = parsha![
    _ 52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11
    12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27
    _ 28 29 30 31 32 33 _ 34 35 36 37 57 40 58 43
    44 45 46 47 48 49 59
];

static MONDAY_DEFICIENT_LEAP: [Option<u8>; 54] = parsha![
    51 52 _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 _
    28 29 30 31 32 33 _ 34 35 36 37 57 40 58 43 44
    45 46 47 48 49 59
];

static MONDAY_DEFICIENT_LEAP_ISRAEL: [Option<u8>; 54] = parsha![
    51 52 _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 _
    28 29 30 31 32 33 34 35 36 37 38 39 40 58 43 44
    45 46 47 48 49 59
];

static MONDAY_COMPLETE_LEAP: [Option<u8>; 55] = parsha![
    51 52 _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 _
    _ 28 29 30 31 32 33 34 35 36 37 38 39 40 58 43
    44 45 46 47 48 49 50
];

static MONDAY_COMPLETE_LEAP_ISRAEL: [Option<u8>; 55] = parsha![
    51 52 _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 _
    28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43
    44 45 46 47 48 49 50
];

static THURSDAY_DEFICIENT_LEAP: [Option<u8>; 55] = parsha![
    52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28
    _ 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43
    44 45 46 47 48 49 50
];

static THURSDAY_COMPLETE_LEAP: [Option<u8>; 55] = parsha![
    52 _ _ 0 1 2 3 4 5 6 7 8 9 10 11 12
    13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28
    _ 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43
    44 45 46 47 48 49 59
];

/// Holidays fixed to a date outside Israel
pub(crate) const fn diaspora_holiday(month: u8, day: u8) -> Option<Holiday> {
    match (month, day) {
        (NISSAN, 15 | 16 | 21 | 22) => Some(Holiday::Pesach),
        (NISSAN, 17..=20) => Some(Holiday::CholHamoedPesach),
        (SIVAN, 6 | 7) => Some(Holiday::Shavuos),
        (TISHREI, 15 | 16) => Some(Holiday::Succos),
        (TISHREI, 17..=20) => Some(Holiday::CholHamoedSuccos),
        (TISHREI, 23) => Some(Holiday::SimchasTorah),
        _ => common_holiday(month, day),
    }
}

/// Holidays fixed to a date in Israel, which keeps one festival day where
/// the diaspora keeps two
pub(crate) const fn israel_holiday(month: u8, day: u8) -> Option<Holiday> {
    match (month, day) {
        (NISSAN, 15 | 21) => Some(Holiday::Pesach),
        (NISSAN, 16..=20) => Some(Holiday::CholHamoedPesach),
        (SIVAN, 6) => Some(Holiday::Shavuos),
        (TISHREI, 15) => Some(Holiday::Succos),
        (TISHREI, 16..=20) => Some(Holiday::CholHamoedSuccos),
        _ => common_holiday(month, day),
    }
}

/// Date-fixed holidays kept the same way everywhere
const fn common_holiday(month: u8, day: u8) -> Option<Holiday> {
    Some(match (month, day) {
        (NISSAN, 14) => Holiday::ErevPesach,
        (IYAR, 14) => Holiday::PesachSheni,
        (IYAR, 18) => Holiday::LagBaomer,
        (SIVAN, 5) => Holiday::ErevShavuos,
        (AV, 15) => Holiday::TuBeav,
        (ELUL, 29) => Holiday::ErevRoshHashana,
        (TISHREI, 1 | 2) => Holiday::RoshHashana,
        (TISHREI, 9) => Holiday::ErevYomKippur,
        (TISHREI, 10) => Holiday::YomKippur,
        (TISHREI, 14) => Holiday::ErevSuccos,
        (TISHREI, 21) => Holiday::HoshanaRabba,
        (TISHREI, 22) => Holiday::SheminiAtzeres,
        // Kislev 30 only exists in some years
        (KISLEV, 25..=30) | (TEVES, 1 | 2) => Holiday::Chanukah,
        (TEVES, 10) => Holiday::TenthOfTeves,
        (SHEVAT, 15) => Holiday::TuBeshevat,
        (ADAR_II, 14) => Holiday::Purim,
        (ADAR_II, 15) => Holiday::ShushanPurim,
        _ => return None,
    })
}

/// Fasts pushed off Shabbos onto another weekday
pub(crate) const fn postponed_fast(month: u8, day: u8, weekday: Weekday) -> Option<Holiday> {
    Some(match (month, day, weekday) {
        (TAMMUZ, 18, Weekday::Sunday) => Holiday::SeventeenOfTammuz,
        (AV, 10, Weekday::Sunday) => Holiday::TishaBeav,
        (TISHREI, 4, Weekday::Sunday) => Holiday::FastOfGedalyah,
        (ADAR_II, 11 | 12, Weekday::Thursday) => Holiday::FastOfEsther,
        _ => return None,
    })
}

/// Fasts on their own date, which never fall on Shabbos
pub(crate) const fn regular_fast(month: u8, day: u8, weekday: Weekday) -> Option<Holiday> {
    if weekday.is_shabbos() {
        return None;
    }
    Some(match (month, day) {
        (TAMMUZ, 17) => Holiday::SeventeenOfTammuz,
        (AV, 9) => Holiday::TishaBeav,
        (TISHREI, 3) => Holiday::FastOfGedalyah,
        (ADAR_II, 13) => Holiday::FastOfEsther,
        _ => return None,
    })
}

/// Israeli national days, moved off days adjoining Shabbos
pub(crate) const fn modern_holiday(month: u8, day: u8, weekday: Weekday) -> Option<Holiday> {
    use Weekday::{Friday, Monday, Sunday, Thursday, Tuesday, Wednesday};

    Some(match (month, day, weekday) {
        (NISSAN, 26, Thursday) | (NISSAN, 28, Monday) => Holiday::YomHashoah,
        (NISSAN, 27, w) if !matches!(w, Sunday | Friday) => Holiday::YomHashoah,
        (IYAR, 4, Tuesday) | (IYAR, 2 | 3, Wednesday) | (IYAR, 5, Monday) => {
            Holiday::YomHazikaron
        }
        (IYAR, 5, Wednesday) | (IYAR, 3 | 4, Thursday) | (IYAR, 6, Tuesday) => {
            Holiday::YomHaatzmaut
        }
        (IYAR, 28, _) => Holiday::YomYerushalayim,
        _ => return None,
    })
}

/// Number of tractates in the Daf Yomi order
pub(crate) const TRACTATE_COUNT: usize = 40;

/// Index of Shekalim, whose folio count differs between editions
pub(crate) const SHEKALIM: usize = 4;
/// Folios of Shekalim in cycles up to and including the 7th
pub(crate) const SHEKALIM_FOLIOS_EARLY: u16 = 13;

/// Folios per tractate in Daf Yomi order, Shekalim as learned from the 8th
/// cycle on
pub(crate) static FOLIOS_PER_TRACTATE: [u16; TRACTATE_COUNT] = [
    64, 157, 105, 121, 22, 88, 56, 40, 35, 31, 32, 29, 27, 122, 112, 91, 66, 49, 90, 82, 119, 119,
    176, 113, 24, 49, 76, 14, 120, 110, 142, 61, 34, 34, 28, 22, 4, 10, 4, 73,
];

/// Folio numbering of the minor tractates bundled into Meilah picks up where
/// the printed edition places them
pub(crate) const fn folio_correction(tractate: usize) -> u16 {
    match tractate {
        36 => 21,
        37 => 24,
        38 => 33,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keys() -> Vec<ParshaKey> {
        let mut keys = Vec::new();
        for rosh_hashana in [Weekday::Monday, Weekday::Tuesday, Weekday::Thursday, Weekday::Saturday] {
            for kviah in [Kviah::Deficient, Kviah::Regular, Kviah::Complete] {
                for leap in [false, true] {
                    keys.push(ParshaKey { rosh_hashana, kviah, leap });
                }
            }
        }
        keys
    }

    #[test]
    fn test_fourteen_keys_per_locale() {
        let diaspora = all_keys()
            .into_iter()
            .filter(|&k| diaspora_parsha_sequence(k).is_some())
            .count();
        let israel = all_keys()
            .into_iter()
            .filter(|&k| israel_parsha_sequence(k).is_some())
            .count();
        assert_eq!(diaspora, 14);
        assert_eq!(israel, 14);
    }

    #[test]
    fn test_parsha_sequence_lengths() {
        for key in all_keys() {
            if let Some(sequence) = diaspora_parsha_sequence(key) {
                let expected: &[usize] = if key.leap { &[54, 55] } else { &[50, 51] };
                assert!(expected.contains(&sequence.len()), "{key:?}");
            }
        }
    }

    #[test]
    fn test_parsha_entries_in_range() {
        for key in all_keys() {
            for sequence in [diaspora_parsha_sequence(key), israel_parsha_sequence(key)]
                .into_iter()
                .flatten()
            {
                assert!(sequence.iter().flatten().all(|&p| p < 62), "{key:?}");
            }
        }
    }

    #[test]
    fn test_israel_holidays_drop_second_days() {
        assert_eq!(diaspora_holiday(NISSAN, 22), Some(Holiday::Pesach));
        assert_eq!(israel_holiday(NISSAN, 22), None);
        assert_eq!(diaspora_holiday(SIVAN, 7), Some(Holiday::Shavuos));
        assert_eq!(israel_holiday(SIVAN, 7), None);
        assert_eq!(diaspora_holiday(TISHREI, 23), Some(Holiday::SimchasTorah));
        assert_eq!(israel_holiday(TISHREI, 23), None);
        assert_eq!(israel_holiday(NISSAN, 16), Some(Holiday::CholHamoedPesach));
        assert_eq!(israel_holiday(TISHREI, 16), Some(Holiday::CholHamoedSuccos));
    }

    #[test]
    fn test_fasts() {
        assert_eq!(regular_fast(TAMMUZ, 17, Weekday::Tuesday), Some(Holiday::SeventeenOfTammuz));
        assert_eq!(regular_fast(TAMMUZ, 17, Weekday::Saturday), None);
        assert_eq!(postponed_fast(TAMMUZ, 18, Weekday::Sunday), Some(Holiday::SeventeenOfTammuz));
        assert_eq!(postponed_fast(TAMMUZ, 18, Weekday::Monday), None);
        assert_eq!(postponed_fast(ADAR_II, 11, Weekday::Thursday), Some(Holiday::FastOfEsther));
    }

    #[test]
    fn test_no_regular_fast_on_shabbos() {
        let fasts = [(TAMMUZ, 17), (AV, 9), (TISHREI, 3), (ADAR_II, 13)];
        for (month, day) in fasts {
            assert!(regular_fast(month, day, Weekday::Friday).is_some(), "{month}-{day}");
            assert_eq!(regular_fast(month, day, Weekday::Saturday), None, "{month}-{day}");
        }
    }

    #[test]
    fn test_modern_holidays() {
        assert_eq!(modern_holiday(NISSAN, 27, Weekday::Sunday), None);
        assert_eq!(modern_holiday(NISSAN, 27, Weekday::Tuesday), Some(Holiday::YomHashoah));
        assert_eq!(modern_holiday(NISSAN, 28, Weekday::Monday), Some(Holiday::YomHashoah));
        // 27 Nissan only ever falls on Sunday, Tuesday, Thursday or Friday
        assert_eq!(modern_holiday(NISSAN, 27, Weekday::Thursday), Some(Holiday::YomHashoah));
        assert_eq!(modern_holiday(NISSAN, 27, Weekday::Friday), None);
        assert_eq!(modern_holiday(NISSAN, 26, Weekday::Thursday), Some(Holiday::YomHashoah));
        assert_eq!(modern_holiday(NISSAN, 26, Weekday::Wednesday), None);
        assert_eq!(modern_holiday(IYAR, 5, Weekday::Monday), Some(Holiday::YomHazikaron));
        assert_eq!(modern_holiday(IYAR, 6, Weekday::Tuesday), Some(Holiday::YomHaatzmaut));
        assert_eq!(modern_holiday(IYAR, 28, Weekday::Friday), Some(Holiday::YomYerushalayim));
    }

    #[test]
    fn test_folio_table() {
        let steps: u16 = FOLIOS_PER_TRACTATE.iter().map(|&f| f - 1).sum();
        assert_eq!(steps, 2711);
        assert_eq!(steps - (FOLIOS_PER_TRACTATE[SHEKALIM] - SHEKALIM_FOLIOS_EARLY), 2702);
    }
}
