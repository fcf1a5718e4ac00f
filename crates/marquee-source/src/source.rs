//! Data source abstraction.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use marquee_types::{MarqueeError, SaleRecord};
use thiserror::Error;

/// Errors that can occur while fetching sales rows.
#[derive(Error, Debug)]
pub enum SourceError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),
}

impl From<SourceError> for MarqueeError {
    fn from(err: SourceError) -> Self {
        Self::Source(err.to_string())
    }
}

/// Filter applied by a source before handing rows to the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesQuery {
    /// Earliest transaction date to include.
    pub since: Option<NaiveDate>,
    /// Event names to include (all events when `None`).
    pub events: Option<BTreeSet<String>>,
}

impl SalesQuery {
    /// Creates a query matching every row.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            since: None,
            events: None,
        }
    }

    /// Restricts the query to rows on or after `since`.
    #[must_use]
    pub const fn with_since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    /// Restricts the query to the given events.
    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if the record passes the filter.
    ///
    /// Records whose date does not parse are kept so the aggregator can
    /// report them.
    #[must_use]
    pub fn matches(&self, record: &SaleRecord) -> bool {
        if let Some(events) = &self.events
            && !events.contains(record.event())
        {
            return false;
        }
        match (self.since, record.date()) {
            (Some(since), Ok(date)) => date >= since,
            _ => true,
        }
    }
}

/// A provider of sales rows.
#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Returns every row matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    async fn fetch(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>, SourceError>;

    /// Returns a short description of the source for logs.
    fn describe(&self) -> String;
}
