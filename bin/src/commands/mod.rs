//! Subcommand implementations.

pub(crate) mod report;
pub(crate) mod summary;
pub(crate) mod trend;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` command-line date.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {value:?}, expected YYYY-MM-DD"))
}

/// Today's date in UTC.
pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
