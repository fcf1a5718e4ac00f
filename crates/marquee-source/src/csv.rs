//! CSV-file data source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use marquee_types::{SaleRecord, SeriesKey};
use serde::Deserialize;
use tokio::io::AsyncRead;
use tracing::debug;

use crate::{SalesQuery, SalesSource, SourceError};

/// One line of a normalized sales CSV.
///
/// Columns: `transaction_date,event_name,show_time,gross,tickets`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    transaction_date: String,
    event_name: String,
    show_time: String,
    gross: f64,
    tickets: u32,
}

impl From<CsvRow> for SaleRecord {
    fn from(row: CsvRow) -> Self {
        Self::new(
            row.transaction_date,
            SeriesKey::new(row.event_name, row.show_time),
            row.gross,
            row.tickets,
        )
    }
}

/// Reads every sales row matching `query` from an async CSV reader.
///
/// The input must have a header line naming the columns
/// `transaction_date`, `event_name`, `show_time`, `gross` and `tickets`
/// (in any order; extra columns are ignored).
///
/// # Errors
///
/// Returns an error if the input cannot be read or a row does not decode.
pub async fn read_sales<R>(reader: R, query: &SalesQuery) -> Result<Vec<SaleRecord>, SourceError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut deserializer = csv_async::AsyncReaderBuilder::new()
        .trim(csv_async::Trim::All)
        .create_deserializer(reader);
    let mut rows = deserializer.deserialize::<CsvRow>();

    let mut records = Vec::new();
    let mut skipped = 0_usize;
    while let Some(row) = rows.next().await {
        let record = SaleRecord::from(row?);
        if query.matches(&record) {
            records.push(record);
        } else {
            skipped += 1;
        }
    }

    debug!(kept = records.len(), skipped, "read sales csv");
    Ok(records)
}

/// Normalized sales CSV on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SalesSource for CsvSource {
    async fn fetch(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>, SourceError> {
        let file = tokio::fs::File::open(&self.path).await?;
        read_sales(file, query).await
    }

    fn describe(&self) -> String {
        format!("csv {}", self.path.display())
    }
}
