//! Mean lunar conjunctions (molados) and the placement of Rosh Hashana.
//!
//! Month numbers passed in here are the calendar's Nissan-based numbers;
//! [`month_of_year`] converts them to the Tishrei-based ordinal the molad
//! count needs.

use crate::chalakim::{self, CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_MONTH};
use crate::consts::{LEAP_YEARS_PER_CYCLE, METONIC_CYCLE_MONTHS, METONIC_CYCLE_YEARS};
use crate::convert::is_leap_year;
use crate::prelude::*;
use tracing::trace;

/// Molad at or after noon (18 hours from 18:00 the evening before)
const MOLAD_ZAKEN_CHALAKIM: i64 = 19_440;
/// GaTRaD: 9 hours 204 chalakim on a Tuesday
const GATRAD_CHALAKIM: i64 = 9924;
/// BeTuTaKFoT: 15 hours 589 chalakim on a Monday
const BETUTAKFOT_CHALAKIM: i64 = 16_789;

/// A postponement rule that moved Rosh Hashana off its molad day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Dechiya {
    /// The molad falls at or after noon
    #[display(fmt = "molad zaken")]
    MoladZaken,
    /// Tuesday molad at or after 9h 204p in a common year
    #[display(fmt = "GaTRaD")]
    Gatrad,
    /// Monday molad at or after 15h 589p in the year after a leap year
    #[display(fmt = "BeTuTaKFoT")]
    Betutakfot,
    /// Rosh Hashana may not fall on Sunday, Wednesday or Friday
    #[display(fmt = "lo ADU rosh")]
    LoAdu,
}

/// Converts a Nissan-based month number into its position counted from
/// Tishrei (Tishrei = 1).
pub const fn month_of_year(year: u16, month: u8) -> u8 {
    if is_leap_year(year) {
        (month % 13 + 6) % 13 + 1
    } else {
        (month % 12 + 5) % 12 + 1
    }
}

/// Chalakim from the start of the epoch week to the molad of `month` in
/// `year`.
pub const fn chalakim_since_molad_tohu(year: u16, month: u8) -> i64 {
    molad_chalakim(year as u32, month_of_year(year, month))
}

/// Leap year test over the wider year type used for "the year after"
const fn is_leap(year: u32) -> bool {
    (7 * year as u64 + 1) % 19 < 7
}

/// Molad of the `ordinal`th month counted from Tishrei (Tishrei = 1)
const fn molad_chalakim(year: u32, ordinal: u8) -> i64 {
    let years_before = year as i64 - 1;
    let cycles = years_before.div_euclid(METONIC_CYCLE_YEARS);
    let year_in_cycle = years_before.rem_euclid(METONIC_CYCLE_YEARS);

    let months = cycles * METONIC_CYCLE_MONTHS
        + year_in_cycle * 12
        + (LEAP_YEARS_PER_CYCLE * year_in_cycle + 1) / METONIC_CYCLE_YEARS
        + ordinal as i64
        - 1;

    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months
}

/// Locates Rosh Hashana of `year` and reports which dechiyos applied.
///
/// At most one of the molad rules fires, and Lo ADU can add one more day on
/// top of it.
const fn locate_rosh_hashana(year: u32) -> (i64, Option<Dechiya>, bool) {
    // Tishrei is the first month of the year
    let (mut day, parts) = chalakim::split_days(molad_chalakim(year, 1));

    let molad_rule = if parts >= MOLAD_ZAKEN_CHALAKIM {
        Some(Dechiya::MoladZaken)
    } else if day % 7 == 2 && parts >= GATRAD_CHALAKIM && !is_leap(year) {
        Some(Dechiya::Gatrad)
    } else if day % 7 == 1 && parts >= BETUTAKFOT_CHALAKIM && year > 0 && is_leap(year - 1) {
        Some(Dechiya::Betutakfot)
    } else {
        None
    };
    if molad_rule.is_some() {
        day += 1;
    }

    let lo_adu = matches!(day % 7, 0 | 3 | 5);
    if lo_adu {
        day += 1;
    }
    (day, molad_rule, lo_adu)
}

/// Days from the start of the epoch week to Rosh Hashana of `year`.
pub fn elapsed_days_for_tishrei(year: u16) -> i64 {
    elapsed_days(u32::from(year))
}

/// As [`elapsed_days_for_tishrei`], for years one past `u16::MAX` too
pub(crate) fn elapsed_days(year: u32) -> i64 {
    let (day, molad_rule, lo_adu) = locate_rosh_hashana(year);
    if let Some(dechiya) = molad_rule {
        trace!(year, %dechiya, "postponed Rosh Hashana");
    }
    if lo_adu {
        trace!(year, dechiya = %Dechiya::LoAdu, "postponed Rosh Hashana");
    }
    day
}

/// The dechiyos that moved Rosh Hashana of `year`, in the order applied.
pub fn rosh_hashana_postponements(year: u16) -> Vec<Dechiya> {
    let (_, molad_rule, lo_adu) = locate_rosh_hashana(u32::from(year));
    molad_rule
        .into_iter()
        .chain(lo_adu.then_some(Dechiya::LoAdu))
        .collect()
}
