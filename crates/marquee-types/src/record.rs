//! Sales record representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A distinct event + showtime combination, tracked as one chart line.
///
/// The `"event - show_time"` label from [`Display`](std::fmt::Display) is for
/// people only. Two keys may share a label, so the key serializes as a struct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    /// Event (show) name.
    pub event: String,
    /// Showtime label as reported by the ticketing provider.
    pub show_time: String,
}

impl SeriesKey {
    /// Creates a new series key.
    #[must_use]
    pub fn new(event: impl Into<String>, show_time: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            show_time: show_time.into(),
        }
    }
}

impl std::fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.event, self.show_time)
    }
}

/// A single sales row as supplied by the data source.
///
/// Records are never mutated by the aggregation layer. The transaction date is
/// kept exactly as delivered; use [`SaleRecord::date`] to read the calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Transaction date, `YYYY-MM-DD` optionally followed by a time of day.
    pub transaction_date: String,
    /// The series this sale belongs to.
    pub series: SeriesKey,
    /// Gross value of the sale.
    pub revenue: f64,
    /// Number of tickets sold.
    pub tickets: u32,
}

impl SaleRecord {
    /// Creates a new sales record.
    #[must_use]
    pub fn new(
        transaction_date: impl Into<String>,
        series: SeriesKey,
        revenue: f64,
        tickets: u32,
    ) -> Self {
        Self {
            transaction_date: transaction_date.into(),
            series,
            revenue,
            tickets,
        }
    }

    /// Returns the calendar day of the transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the date portion is not a valid `YYYY-MM-DD` date.
    pub fn date(&self) -> Result<NaiveDate, ParseError> {
        parse_sale_date(&self.transaction_date)
    }

    /// Returns the event name of the series.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.series.event
    }
}

/// Parses the calendar day out of a transaction timestamp.
///
/// Anything after a `T` or a space is treated as time of day and discarded.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] if the date portion does not parse.
pub fn parse_sale_date(value: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = value.trim();
    let day = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate {
        value: value.to_string(),
    })
}
