//! Hebrew calendar arithmetic: conversion between Gregorian and Hebrew
//! dates, molad and Rosh Hashana computation, and the calendar facts derived
//! from a date (holidays and fasts, the Omer, the weekly parsha and the Daf
//! Yomi).
//!
//! ```
//! use hebrew_date::{GregorianDate, HebrewDate, Holiday, JewishCalendar};
//!
//! let date = HebrewDate::from_gregorian(GregorianDate::new(2024, 4, 23)?);
//! assert_eq!(date.to_string(), "5784-01-15");
//!
//! let calendar = JewishCalendar::new(date);
//! assert_eq!(calendar.yom_tov_index(), Some(Holiday::Pesach));
//! # Ok::<(), hebrew_date::CalendarError>(())
//! ```

pub mod chalakim;
pub mod convert;
pub mod molad;

mod calendar;
mod config;
mod consts;
mod daf_yomi;
mod date;
mod error;
mod gregorian;
mod prelude;
mod tables;
mod types;

pub use calendar::{Holiday, JewishCalendar};
pub use config::CalendarConfig;
pub use consts::*;
pub use daf_yomi::DafYomi;
pub use date::HebrewDate;
pub use error::{CalendarError, InvalidDateReason, MoladComponent};
pub use gregorian::GregorianDate;
pub use molad::Dechiya;
pub use types::{Kviah, MoladTime, Weekday};
