use crate::config::CalendarConfig;
use crate::consts::{ADAR, ELUL, IYAR, KISLEV, NISSAN, SIVAN, TEVES, TISHREI};
use crate::convert;
use crate::daf_yomi::{self, DafYomi};
use crate::date::HebrewDate;
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::tables::{self, ParshaKey};
use crate::types::Weekday;
use std::cell::Cell;
use tracing::{debug, error};

/// Holidays, fasts and other marked days, numbered with stable indices.
///
/// Index 20 is unused. `RoshChodesh` is never returned by
/// [`JewishCalendar::yom_tov_index`]; use [`JewishCalendar::is_rosh_chodesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Holiday {
    ErevPesach = 0,
    Pesach = 1,
    CholHamoedPesach = 2,
    PesachSheni = 3,
    ErevShavuos = 4,
    Shavuos = 5,
    SeventeenOfTammuz = 6,
    TishaBeav = 7,
    TuBeav = 8,
    ErevRoshHashana = 9,
    RoshHashana = 10,
    FastOfGedalyah = 11,
    ErevYomKippur = 12,
    YomKippur = 13,
    ErevSuccos = 14,
    Succos = 15,
    CholHamoedSuccos = 16,
    HoshanaRabba = 17,
    SheminiAtzeres = 18,
    SimchasTorah = 19,
    Chanukah = 21,
    TenthOfTeves = 22,
    TuBeshevat = 23,
    FastOfEsther = 24,
    Purim = 25,
    ShushanPurim = 26,
    PurimKatan = 27,
    RoshChodesh = 28,
    YomHashoah = 29,
    YomHazikaron = 30,
    YomHaatzmaut = 31,
    YomYerushalayim = 32,
    LagBaomer = 33,
}

impl Holiday {
    /// Stable numeric index of the holiday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_erev_yom_tov(self) -> bool {
        matches!(
            self,
            Self::ErevPesach
                | Self::ErevShavuos
                | Self::ErevRoshHashana
                | Self::ErevYomKippur
                | Self::ErevSuccos
        )
    }

    pub const fn is_chol_hamoed(self) -> bool {
        matches!(self, Self::CholHamoedPesach | Self::CholHamoedSuccos)
    }

    pub const fn is_taanis(self) -> bool {
        matches!(
            self,
            Self::SeventeenOfTammuz
                | Self::TishaBeav
                | Self::YomKippur
                | Self::FastOfGedalyah
                | Self::TenthOfTeves
                | Self::FastOfEsther
        )
    }
}

impl From<Holiday> for u8 {
    fn from(holiday: Holiday) -> Self {
        holiday.index()
    }
}

/// Outcome of the last holiday lookup, kept until the date changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HolidayMemo {
    #[default]
    Unknown,
    Holiday(Holiday),
    NotHoliday,
}

/// A Hebrew date together with the locale rules needed to answer calendar
/// questions about it: holidays, fasts, the Omer, the weekly parsha and the
/// Daf Yomi.
///
/// The holiday lookup is remembered until the date is moved, so repeated
/// predicate calls on the same day do a single table scan. The memo lives in
/// a [`Cell`], which makes a calendar `Send` but not `Sync`. Clone it to
/// share between threads.
#[derive(Debug, Clone)]
pub struct JewishCalendar {
    date:   HebrewDate,
    config: CalendarConfig,
    memo:   Cell<HolidayMemo>,
    #[cfg(test)]
    scans:  Cell<u32>,
}

impl JewishCalendar {
    /// A calendar with the default (diaspora) configuration
    pub fn new(date: HebrewDate) -> Self {
        Self::with_config(date, CalendarConfig::default())
    }

    pub fn with_config(date: HebrewDate, config: CalendarConfig) -> Self {
        Self {
            date,
            config,
            memo: Cell::new(HolidayMemo::Unknown),
            #[cfg(test)]
            scans: Cell::new(0),
        }
    }

    #[inline]
    pub const fn date(&self) -> &HebrewDate {
        &self.date
    }

    #[inline]
    pub const fn config(&self) -> CalendarConfig {
        self.config
    }

    /// Advances one day.
    ///
    /// # Errors
    /// As [`HebrewDate::forward`].
    pub fn forward(&mut self) -> Result<(), CalendarError> {
        self.date.forward()?;
        self.invalidate();
        Ok(())
    }

    /// Steps back one day.
    ///
    /// # Errors
    /// As [`HebrewDate::back`].
    pub fn back(&mut self) -> Result<(), CalendarError> {
        self.date.back()?;
        self.invalidate();
        Ok(())
    }

    pub fn set_gregorian(&mut self, gregorian: GregorianDate) {
        self.date.set_gregorian(gregorian);
        self.invalidate();
    }

    /// Moves to a Hebrew date.
    ///
    /// # Errors
    /// As [`HebrewDate::set_hebrew`]. Nothing changes on failure.
    pub fn set_hebrew(&mut self, year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
        self.date.set_hebrew(year, month, day)?;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&self) {
        self.memo.set(HolidayMemo::Unknown);
    }

    /// The holiday or fast falling on this date, if any
    pub fn yom_tov_index(&self) -> Option<Holiday> {
        match self.memo.get() {
            HolidayMemo::Holiday(holiday) => {
                debug!(date = %self.date, ?holiday, "holiday memo hit");
                return Some(holiday);
            }
            HolidayMemo::NotHoliday => {
                debug!(date = %self.date, "holiday memo hit, no holiday");
                return None;
            }
            HolidayMemo::Unknown => {}
        }

        let holiday = self.lookup_holiday();
        debug!(date = %self.date, ?holiday, "holiday memo miss");
        self.memo.set(match holiday {
            Some(holiday) => HolidayMemo::Holiday(holiday),
            None => HolidayMemo::NotHoliday,
        });
        holiday
    }

    fn lookup_holiday(&self) -> Option<Holiday> {
        #[cfg(test)]
        self.scans.set(self.scans.get() + 1);

        let (month, day) = (self.date.month(), self.date.day());
        let weekday = self.date.day_of_week();

        let fixed = if self.config.in_israel {
            tables::israel_holiday(month, day)
        } else {
            tables::diaspora_holiday(month, day)
        };
        let mut holiday = tables::postponed_fast(month, day, weekday)
            .or(fixed)
            .or_else(|| tables::regular_fast(month, day, weekday));
        if self.config.use_modern_holidays {
            holiday = tables::modern_holiday(month, day, weekday).or(holiday);
        }
        holiday.or_else(|| self.holiday_by_rule(month, day, weekday))
    }

    /// Holidays whose date depends on the shape of the year
    fn holiday_by_rule(&self, month: u8, day: u8, weekday: Weekday) -> Option<Holiday> {
        let leap = self.date.is_leap_year();
        match (month, day) {
            // Chanukah's 8th day when Kislev has only 29 days
            (TEVES, 3) if self.date.is_kislev_short() => Some(Holiday::Chanukah),
            (ADAR, 11 | 12) if !leap && weekday == Weekday::Thursday => Some(Holiday::FastOfEsther),
            (ADAR, 13) if !leap && weekday <= Weekday::Thursday => Some(Holiday::FastOfEsther),
            (ADAR, 14) if !leap => Some(Holiday::Purim),
            (ADAR, 15) if !leap => Some(Holiday::ShushanPurim),
            (ADAR, 14) => Some(Holiday::PurimKatan),
            _ => None,
        }
    }

    /// True on a festival day. Erev Yom Tov, Chanukah and fasts other than
    /// Yom Kippur are not.
    pub fn is_yom_tov(&self) -> bool {
        match self.yom_tov_index() {
            Some(Holiday::YomKippur) => true,
            Some(holiday) => {
                !(holiday.is_erev_yom_tov() || holiday == Holiday::Chanukah || holiday.is_taanis())
            }
            None => false,
        }
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.yom_tov_index().is_some_and(Holiday::is_chol_hamoed)
    }

    /// True on the eve of Pesach, Shavuos, Rosh Hashana, Yom Kippur and
    /// Succos
    pub fn is_erev_yom_tov(&self) -> bool {
        self.yom_tov_index().is_some_and(Holiday::is_erev_yom_tov)
    }

    pub fn is_taanis(&self) -> bool {
        self.yom_tov_index().is_some_and(Holiday::is_taanis)
    }

    pub fn is_chanukah(&self) -> bool {
        self.yom_tov_index() == Some(Holiday::Chanukah)
    }

    /// The 29th of any month but Elul, whose 29th is Erev Rosh Hashana
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.date.day() == 29 && self.date.month() != ELUL
    }

    /// The 30th of a month, or the 1st of any month but Tishrei
    pub fn is_rosh_chodesh(&self) -> bool {
        let day = self.date.day();
        (day == 1 && self.date.month() != TISHREI) || day == 30
    }

    /// Day of Chanukah, 1 to 8
    pub fn day_of_chanukah(&self) -> Option<u8> {
        if !self.is_chanukah() {
            return None;
        }
        let day = self.date.day();
        Some(match self.date.month() {
            KISLEV => day - 24,
            _ if self.date.is_kislev_short() => day + 5,
            _ => day + 6,
        })
    }

    /// Day of the Omer count, 1 to 49, from the second night of Pesach to
    /// Erev Shavuos
    pub fn day_of_omer(&self) -> Option<u8> {
        let day = self.date.day();
        match self.date.month() {
            NISSAN if day >= 16 => Some(day - 15),
            IYAR => Some(day + 15),
            SIVAN if day < 6 => Some(day + 44),
            _ => None,
        }
    }

    /// The parsha read on this Shabbos.
    ///
    /// Returns `Ok(None)` on weekdays and on a Shabbos whose reading is a
    /// holiday reading.
    ///
    /// # Errors
    /// Returns `CalendarError::InternalLookupFailure` if the year's shape
    /// matches no parsha sequence, which means the calendar arithmetic is
    /// broken.
    pub fn parsha_index(&self) -> Result<Option<u8>, CalendarError> {
        if !self.date.day_of_week().is_shabbos() {
            return Ok(None);
        }

        let year = self.date.year();
        let rosh_hashana = convert::absolute_day_unchecked(year, TISHREI, 1);
        let rosh_hashana_weekday = Weekday::from_absolute_day(rosh_hashana);
        let key = ParshaKey {
            rosh_hashana: rosh_hashana_weekday,
            kviah:        self.date.kviah(),
            leap:         self.date.is_leap_year(),
        };

        let sequence = if self.config.in_israel {
            tables::israel_parsha_sequence(key)
        } else {
            tables::diaspora_parsha_sequence(key)
        };
        let Some(sequence) = sequence else {
            error!(date = %self.date, ?key, "no parsha sequence for year");
            return Err(CalendarError::InternalLookupFailure(format!(
                "no parsha sequence for {key:?}"
            )));
        };

        // Weeks since the first Shabbos on or after Rosh Hashana
        let first_shabbos = rosh_hashana + 7 - i64::from(rosh_hashana_weekday.get());
        let week = (self.date.absolute_day() - first_shabbos) / 7;
        match usize::try_from(week).ok().and_then(|week| sequence.get(week)) {
            Some(&parsha) => Ok(parsha),
            None => {
                error!(date = %self.date, ?key, week, "parsha week out of range");
                Err(CalendarError::InternalLookupFailure(format!(
                    "week {week} is outside the parsha sequence for {key:?}"
                )))
            }
        }
    }

    /// The Daf Yomi Bavli learned on this date.
    ///
    /// # Errors
    /// Returns `CalendarError::PrecedesSupportedRange` before 1923-10-11.
    pub fn daf_yomi_bavli(&self) -> Result<DafYomi, CalendarError> {
        daf_yomi::daf_yomi_bavli(self.date.gregorian())
    }
}

impl From<HebrewDate> for JewishCalendar {
    fn from(date: HebrewDate) -> Self {
        Self::new(date)
    }
}
