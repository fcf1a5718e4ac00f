//! Output format abstraction.

use marquee_aggregate::{EventSummary, TrendRow, ViewModel, column_name};
use marquee_types::{MarqueeError, Metric, SeriesKey};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson]
    }

    /// Infers the format from a file extension, if it names one.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::all()
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
            .or_else(|| ext.parse().ok())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FormatError> for MarqueeError {
    fn from(err: FormatError) -> Self {
        Self::Format(err.to_string())
    }
}

/// One output column of a trend view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendColumn {
    /// Series the column belongs to.
    pub series: SeriesKey,
    /// Metric shown.
    pub metric: Metric,
    /// Whether the column holds the moving average.
    pub averaged: bool,
    /// Consumer-facing label.
    pub label: String,
}

impl TrendColumn {
    fn new(series: &SeriesKey, metric: Metric, averaged: bool) -> Self {
        Self {
            series: series.clone(),
            metric,
            averaged,
            label: column_name(series, metric, averaged),
        }
    }

    /// Returns the column's value in `row` (0 when absent).
    #[must_use]
    pub fn value(&self, row: &TrendRow) -> f64 {
        if self.averaged {
            row.average(&self.series, self.metric).unwrap_or(0.0)
        } else {
            row.value(&self.series, self.metric)
        }
    }
}

/// Returns the columns written for a view, in output order.
///
/// Calendar views carry every metric; normalized views carry only the metric
/// they were prepared for. Averaged views add an `_avg` column after each raw
/// column.
#[must_use]
pub fn trend_columns(view: &ViewModel) -> Vec<TrendColumn> {
    let metrics: &[Metric] = if view.axis_mode.is_normalized() {
        std::slice::from_ref(&view.metric)
    } else {
        Metric::all()
    };

    let series: Vec<&SeriesKey> = if view.axis_mode.is_normalized() {
        view.on_sale_dates.iter().map(|entry| &entry.series).collect()
    } else {
        view.series_keys.iter().collect()
    };

    let mut columns = Vec::new();
    for key in series {
        for &metric in metrics {
            columns.push(TrendColumn::new(key, metric, false));
            if view.is_averaged() {
                columns.push(TrendColumn::new(key, metric, true));
            }
        }
    }
    columns
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a trend view to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_trend<W: Write + Send>(&self, view: &ViewModel, writer: W) -> Result<(), FormatError>;

    /// Writes event summaries to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_events<W: Write + Send>(
        &self,
        events: &[EventSummary],
        writer: W,
    ) -> Result<(), FormatError>;
}
