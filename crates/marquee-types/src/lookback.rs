//! Trailing date windows for trend queries.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days a trend query reaches back from its reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lookback(u32);

impl Lookback {
    /// The dashboard's default trend window.
    pub const DEFAULT_DAYS: u32 = 180;

    /// Creates a lookback of `days` days.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self(days)
    }

    /// Returns the window length in days.
    #[must_use]
    pub const fn num_days(&self) -> u32 {
        self.0
    }

    /// Returns the earliest date included when looking back from `today`.
    ///
    /// Saturates at the minimum representable date.
    #[must_use]
    pub fn since(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.0)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns true if `date` falls inside the window ending at `today`.
    #[must_use]
    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        date >= self.since(today) && date <= today
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl std::fmt::Display for Lookback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D", self.0)
    }
}
