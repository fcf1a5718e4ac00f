//! Report command implementation.

use crate::display;
use anyhow::Result;
use marquee_lib::prelude::*;
use std::path::Path;

/// Compute and print the KPI snapshot of one event.
pub(crate) async fn report(
    input: &Path,
    event: &str,
    capacity: u64,
    as_of: Option<&str>,
    json: bool,
) -> Result<()> {
    let as_of = match as_of {
        Some(value) => super::parse_date(value)?,
        None => super::today(),
    };

    let source = CsvSource::new(input);
    let query = SalesQuery::all().with_events([event]);
    let records = source.fetch(&query).await?;
    tracing::info!(
        source = %source.describe(),
        event,
        records = records.len(),
        %as_of,
        "fetched event sales"
    );
    if records.is_empty() {
        tracing::warn!(event, "no sales found for event");
    }

    let report = EventReport::compute(event, &records, capacity, as_of)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_report(&report);
    }
    Ok(())
}
