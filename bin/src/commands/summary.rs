//! Summary command implementation.

use crate::display;
use anyhow::Result;
use marquee_lib::prelude::*;
use std::path::Path;

/// Rank events by total gross and write the table.
///
/// `limit` of `None` writes every event in name order.
pub(crate) async fn summary(
    input: &Path,
    limit: Option<usize>,
    output: Option<&Path>,
    format: Option<OutputFormat>,
    pretty: bool,
) -> Result<()> {
    let source = CsvSource::new(input);
    let records = source.fetch(&SalesQuery::all()).await?;
    tracing::info!(source = %source.describe(), records = records.len(), "fetched sales");

    let summaries = rank(&records, limit);
    if summaries.is_empty() {
        tracing::warn!("no sales found");
    }

    display::write_events(&summaries, output, format, pretty)
}

fn rank(records: &[SaleRecord], limit: Option<usize>) -> Vec<EventSummary> {
    let summaries = summarize_events(records);
    match limit {
        Some(n) => top_events(&summaries, n),
        None => summaries,
    }
}
