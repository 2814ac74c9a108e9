use serde::{Deserialize, Serialize};

/// Locale settings that change which holidays and parsha readings apply.
///
/// Both flags default to off: diaspora reckoning without the Israeli
/// national days. Missing fields fall back to those defaults when
/// deserializing, so `{}` and `{"in_israel": true}` are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Use the Israel holiday and parsha tables
    pub in_israel:           bool,
    /// Include Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut and Yom Yerushalayim
    pub use_modern_holidays: bool,
}

impl CalendarConfig {
    pub const fn with_israel(mut self, in_israel: bool) -> Self {
        self.in_israel = in_israel;
        self
    }

    pub const fn with_modern_holidays(mut self, use_modern_holidays: bool) -> Self {
        self.use_modern_holidays = use_modern_holidays;
        self
    }
}
