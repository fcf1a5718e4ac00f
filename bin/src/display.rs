//! Display utilities and output formatting for the marquee CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use marquee_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Metric selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum MetricArg {
    Revenue,
    Tickets,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Revenue => Self::Revenue,
            MetricArg::Tickets => Self::Tickets,
        }
    }
}

/// Axis mode selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum AxisArg {
    Calendar,
    Normalized,
}

impl From<AxisArg> for AxisMode {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Calendar => Self::Calendar,
            AxisArg::Normalized => Self::Normalized,
        }
    }
}

/// Picks the explicit format, else the one named by the output file
/// extension, else CSV.
pub(crate) fn resolve_format(format: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    format
        .or_else(|| output.and_then(OutputFormat::from_path))
        .unwrap_or_default()
}

/// Opens the output file, or stdout when no path is given.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    })
}

/// Write a trend view in the specified format.
pub(crate) fn write_trend(
    view: &ViewModel,
    output: Option<&Path>,
    format: Option<OutputFormat>,
    pretty: bool,
) -> Result<()> {
    let mut writer = open_output(output)?;

    match resolve_format(format, output) {
        OutputFormat::Csv => CsvFormatter::new().write_trend(view, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_trend(view, &mut writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_trend(view, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

/// Write event summaries in the specified format.
pub(crate) fn write_events(
    events: &[EventSummary],
    output: Option<&Path>,
    format: Option<OutputFormat>,
    pretty: bool,
) -> Result<()> {
    let mut writer = open_output(output)?;

    match resolve_format(format, output) {
        OutputFormat::Csv => CsvFormatter::new().write_events(events, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_events(events, &mut writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_events(events, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

/// Formats an amount with thousands separators and two decimals.
pub(crate) fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Print an event report as a text block.
pub(crate) fn print_report(report: &EventReport) {
    println!("Event:          {}", report.event);
    println!("As of:          {}", report.as_of);
    println!("Box office:     {}", format_amount(report.total_box_office));
    println!("Tickets sold:   {}", report.total_tickets);
    if report.capacity > 0 {
        println!(
            "Occupancy:      {:.1}% of {}",
            report.occupancy * 100.0,
            report.capacity
        );
        println!("Remaining:      {}", report.tickets_remaining);
    }
    println!("ATP:            {}", format_amount(report.atp));
    println!(
        "Today:          {} ({} tickets)",
        format_amount(report.gross_today),
        report.tickets_today
    );
    println!(
        "Last day:       {} ({} tickets, ATP {})",
        format_amount(report.gross_last_day),
        report.tickets_last_day,
        format_amount(report.atp_last_day)
    );

    if !report.showtimes.is_empty() {
        println!("\n{:<16} {:>10} {:>14} {:>10}", "SHOW TIME", "TICKETS", "GROSS", "ATP");
        println!("{}", "-".repeat(53));
        for show in &report.showtimes {
            println!(
                "{:<16} {:>10} {:>14} {:>10}",
                show.show_time,
                show.total_tickets,
                format_amount(show.total_gross),
                format_amount(show.atp())
            );
        }
    }

    if report.recent_days.is_empty() {
        println!("\nNo sales in the last {} days.", EventReport::RECENT_DAYS);
        return;
    }

    println!("\n{:<12} {:>10} {:>14}", "DATE", "TICKETS", "GROSS");
    println!("{}", "-".repeat(38));
    for day in &report.recent_days {
        println!(
            "{:<12} {:>10} {:>14}",
            day.date.to_string(),
            day.tickets,
            format_amount(day.gross)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1234.0), "1,234.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-42_000.0), "-42,000.00");
    }

    #[test]
    fn test_resolve_format() {
        let json = Path::new("trend.json");
        assert_eq!(resolve_format(None, None), OutputFormat::Csv);
        assert_eq!(resolve_format(None, Some(json)), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some(OutputFormat::Ndjson), Some(json)),
            OutputFormat::Ndjson
        );
        assert_eq!(resolve_format(None, Some(Path::new("trend.out"))), OutputFormat::Csv);
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(Metric::from(MetricArg::Tickets), Metric::Tickets);
        assert_eq!(AxisMode::from(AxisArg::Normalized), AxisMode::Normalized);
    }
}
