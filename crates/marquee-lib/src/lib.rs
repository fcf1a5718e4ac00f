//! Box-office sales trend reporting library.
//!
//! This is a facade crate that re-exports functionality from the marquee
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use marquee_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = CsvSource::new("sales.csv");
//!     let today = chrono::Utc::now().date_naive();
//!     let query = SalesQuery::all().with_since(Lookback::default().since(today));
//!
//!     let options = TrendOptions::new().with_window(7);
//!     let view = trend_view(&source, &query, options).await?;
//!     println!("{} rows across {} series", view.rows.len(), view.series_keys.len());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/marquee/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use marquee_types::*;

// Re-export aggregation
pub use marquee_aggregate::{
    AxisValue, Cell, DailyTotals, EventReport, EventSummary, OnSaleDate, SeriesValues,
    ShowtimeSummary, TrendAggregator, TrendOptions, TrendRow, ViewModel, column_name,
    summarize_events, summarize_showtimes, top_events,
};

// Re-export sources
#[cfg(feature = "source")]
pub use marquee_source::{CsvSource, MemorySource, SalesQuery, SalesSource, SourceError, read_sales};

// Re-export formatters
#[cfg(feature = "format")]
pub use marquee_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TrendColumn,
    trend_columns,
};

/// Fetches sales from `source` and builds a trend view.
///
/// # Errors
///
/// Returns an error if the source fails or a row has a malformed date.
#[cfg(feature = "source")]
pub async fn trend_view<S>(source: &S, query: &SalesQuery, options: TrendOptions) -> Result<ViewModel>
where
    S: SalesSource + ?Sized,
{
    let records = source.fetch(query).await?;
    tracing::info!(
        source = %source.describe(),
        records = records.len(),
        "fetched sales"
    );
    Ok(TrendAggregator::new(options).build(&records)?)
}

/// Prelude module for convenient imports.
///
/// ```
/// use marquee_lib::prelude::*;
/// ```
pub mod prelude {
    pub use marquee_types::{
        AxisMode, Lookback, MarqueeError, Metric, ParseError, Result, SaleRecord, SeriesKey,
    };

    pub use marquee_aggregate::{
        EventReport, EventSummary, ShowtimeSummary, TrendAggregator, TrendOptions, TrendRow,
        ViewModel, summarize_events, summarize_showtimes, top_events,
    };

    #[cfg(feature = "source")]
    pub use marquee_source::{CsvSource, MemorySource, SalesQuery, SalesSource};

    #[cfg(feature = "source")]
    pub use crate::trend_view;

    #[cfg(feature = "format")]
    pub use marquee_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}

#[cfg(all(test, feature = "source"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trend_view_from_memory() {
        let source = MemorySource::new(vec![
            SaleRecord::new("2024-01-01", SeriesKey::new("A", "Eve"), 100.0, 5),
            SaleRecord::new("2024-01-02", SeriesKey::new("A", "Eve"), 200.0, 10),
        ]);
        let view = trend_view(&source, &SalesQuery::all(), TrendOptions::new().with_window(7))
            .await
            .unwrap();

        assert_eq!(view.rows.len(), 2);
        assert_eq!(
            view.rows[1].average(&SeriesKey::new("A", "Eve"), Metric::Revenue),
            Some(150.0)
        );
    }

    #[tokio::test]
    async fn test_trend_view_surfaces_parse_errors() {
        let source = MemorySource::new(vec![SaleRecord::new(
            "soon",
            SeriesKey::new("A", "Eve"),
            1.0,
            1,
        )]);
        let err = trend_view(&source, &SalesQuery::all(), TrendOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MarqueeError::Parse(ParseError::InvalidDate { .. })));
    }
}
