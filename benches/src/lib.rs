//! Synthetic sales data for marquee benchmarks.

use chrono::{Days, NaiveDate};
use marquee_lib::{SaleRecord, SeriesKey};
use std::borrow::Cow;
use std::io::{self, Write};

/// Shape of a generated sales history.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of distinct events.
    pub events: usize,
    /// Show times per event.
    pub show_times: usize,
    /// Calendar days of sales.
    pub days: u64,
    /// Transactions per series per day.
    pub sales_per_day: usize,
}

impl BenchmarkConfig {
    /// Total number of records this config generates.
    pub const fn record_count(&self) -> u64 {
        (self.events * self.show_times * self.sales_per_day) as u64 * self.days
    }
}

const SHOW_TIMES: [&str; 4] = ["Matinee", "Evening", "Late", "Gala"];

/// Generates a deterministic sales history.
///
/// Each series goes on sale on a different day, and some days are skipped
/// so the aggregator has gaps to fill.
pub fn synthetic_sales(config: &BenchmarkConfig) -> Vec<SaleRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN);
    let mut records = Vec::with_capacity(config.record_count() as usize);

    for event in 0..config.events {
        for show in 0..config.show_times {
            let series = SeriesKey::new(
                format!("Event {event:03}"),
                SHOW_TIMES[show % SHOW_TIMES.len()],
            );
            let offset = ((event * config.show_times + show) % 30) as u64;

            for day in offset..config.days {
                if (day + event as u64) % 7 == 6 {
                    continue;
                }
                let date = start + Days::new(day);
                for sale in 0..config.sales_per_day {
                    let tickets = 1 + ((day as usize + sale + event) % 6) as u32;
                    records.push(SaleRecord::new(
                        format!("{date}T{:02}:15:00", 9 + sale % 12),
                        series.clone(),
                        f64::from(tickets) * 42.5,
                        tickets,
                    ));
                }
            }
        }
    }

    records
}

/// Quotes a CSV field if it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Writes records as a sales CSV.
pub fn write_csv<W: Write>(records: &[SaleRecord], mut writer: W) -> io::Result<()> {
    writeln!(writer, "transaction_date,event_name,show_time,gross,tickets")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{}",
            csv_field(&record.transaction_date),
            csv_field(&record.series.event),
            csv_field(&record.series.show_time),
            record.revenue,
            record.tickets
        )?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_lib::{SalesQuery, read_sales};

    #[test]
    fn test_write_csv_quotes_awkward_names() {
        let records = vec![SaleRecord::new(
            "2024-01-01",
            SeriesKey::new("Me, Myself \"and\" I", "Eve"),
            42.5,
            1,
        )];
        let mut output = Vec::new();
        write_csv(&records, &mut output).unwrap();

        let text = String::from_utf8(output.clone()).unwrap();
        assert!(text.contains("\"Me, Myself \"\"and\"\" I\""));

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let back = runtime
            .block_on(read_sales(output.as_slice(), &SalesQuery::all()))
            .unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_synthetic_sales_are_deterministic() {
        let config = BenchmarkConfig {
            events: 2,
            show_times: 2,
            days: 10,
            sales_per_day: 1,
        };
        assert_eq!(synthetic_sales(&config), synthetic_sales(&config));
        assert!(!synthetic_sales(&config).is_empty());
    }
}
