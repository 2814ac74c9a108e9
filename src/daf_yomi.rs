//! The Daf Yomi Bavli cycle: one folio of the Babylonian Talmud per day.

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::tables::{FOLIOS_PER_TRACTATE, SHEKALIM, SHEKALIM_FOLIOS_EARLY, folio_correction};
use serde::{Deserialize, Serialize};
use tracing::{error, trace};

/// Absolute day of 1923-10-11, the first day of the first cycle
const CYCLE_START_DAY: i64 = 702_279;
/// Absolute day of 1975-06-24, the first day of the 8th cycle, from which
/// Shekalim is learned with 22 folios
const SHEKALIM_CHANGE_DAY: i64 = 721_163;
/// Cycle number starting on `SHEKALIM_CHANGE_DAY`
const SHEKALIM_CHANGE_CYCLE: i64 = 8;
/// Last cycle learned with the short Shekalim
const LAST_EARLY_CYCLE: i64 = 7;
/// Days per cycle with 13 folios of Shekalim
const CYCLE_DAYS_EARLY: i64 = 2702;
/// Days per cycle with 22 folios of Shekalim
const CYCLE_DAYS: i64 = 2711;

/// The folio learned on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DafYomi {
    cycle:    u32,
    tractate: u8,
    folio:    u16,
}

impl DafYomi {
    /// Cycle number, the first cycle being 1
    #[inline]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Tractate index in Daf Yomi order, Berachos being 0
    #[inline]
    pub const fn tractate(&self) -> u8 {
        self.tractate
    }

    /// Folio number. Every tractate starts on folio 2.
    #[inline]
    pub const fn folio(&self) -> u16 {
        self.folio
    }
}

/// The Daf Yomi for a date.
///
/// # Errors
/// Returns `CalendarError::PrecedesSupportedRange` before 1923-10-11.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn daf_yomi_bavli(date: GregorianDate) -> Result<DafYomi, CalendarError> {
    let day = date.to_absolute_day();
    if day < CYCLE_START_DAY {
        return Err(CalendarError::PrecedesSupportedRange {
            date,
            start: GregorianDate::from_absolute_day(CYCLE_START_DAY)?,
        });
    }

    let (cycle, offset) = if day >= SHEKALIM_CHANGE_DAY {
        let elapsed = day - SHEKALIM_CHANGE_DAY;
        (elapsed / CYCLE_DAYS + SHEKALIM_CHANGE_CYCLE, elapsed % CYCLE_DAYS)
    } else {
        let elapsed = day - CYCLE_START_DAY;
        (elapsed / CYCLE_DAYS_EARLY + 1, elapsed % CYCLE_DAYS_EARLY)
    };
    trace!(%date, cycle, offset, "resolved daf yomi cycle");

    // Each tractate starts on folio 2, so it spans (folios - 1) days
    let mut total = 0;
    for (tractate, &folios) in FOLIOS_PER_TRACTATE.iter().enumerate() {
        let folios = if tractate == SHEKALIM && cycle <= LAST_EARLY_CYCLE {
            SHEKALIM_FOLIOS_EARLY
        } else {
            folios
        };
        total += i64::from(folios) - 1;
        if offset < total {
            let folio = 1 + i64::from(folios) - (total - offset);
            return Ok(DafYomi {
                cycle:    cycle as u32,
                tractate: tractate as u8,
                folio:    folio as u16 + folio_correction(tractate),
            });
        }
    }

    error!(%date, cycle, offset, "daf yomi offset past the last tractate");
    Err(CalendarError::InternalLookupFailure(format!(
        "daf yomi offset {offset} of cycle {cycle} is past the last tractate"
    )))
}
