//! Per-event totals.

use std::collections::BTreeMap;

use marquee_types::SaleRecord;
use serde::{Deserialize, Serialize};

/// Lifetime totals of one event across all its showtimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Event name.
    pub name: String,
    /// Total gross value.
    pub total_gross: f64,
    /// Total tickets sold.
    pub total_tickets: u64,
}

impl EventSummary {
    /// Returns the average ticket price, or 0 when nothing was sold.
    #[must_use]
    pub fn atp(&self) -> f64 {
        if self.total_tickets == 0 {
            0.0
        } else {
            self.total_gross / self.total_tickets as f64
        }
    }
}

/// Lifetime totals of one showtime of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowtimeSummary {
    /// Showtime label.
    pub show_time: String,
    /// Total gross value.
    pub total_gross: f64,
    /// Total tickets sold.
    pub total_tickets: u64,
}

impl ShowtimeSummary {
    /// Returns the average ticket price, or 0 when nothing was sold.
    #[must_use]
    pub fn atp(&self) -> f64 {
        if self.total_tickets == 0 {
            0.0
        } else {
            self.total_gross / self.total_tickets as f64
        }
    }
}

/// Sums gross and tickets per event name, ordered by name.
#[must_use]
pub fn summarize_events(records: &[SaleRecord]) -> Vec<EventSummary> {
    let mut totals: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.event()).or_default();
        entry.0 += record.revenue;
        entry.1 += u64::from(record.tickets);
    }

    totals
        .into_iter()
        .map(|(name, (total_gross, total_tickets))| EventSummary {
            name: name.to_string(),
            total_gross,
            total_tickets,
        })
        .collect()
}

/// Sums gross and tickets per showtime of `event`, ordered by showtime.
///
/// Records of other events are ignored.
#[must_use]
pub fn summarize_showtimes(records: &[SaleRecord], event: &str) -> Vec<ShowtimeSummary> {
    let mut totals: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.event() == event) {
        let entry = totals.entry(record.series.show_time.as_str()).or_default();
        entry.0 += record.revenue;
        entry.1 += u64::from(record.tickets);
    }

    totals
        .into_iter()
        .map(|(show_time, (total_gross, total_tickets))| ShowtimeSummary {
            show_time: show_time.to_string(),
            total_gross,
            total_tickets,
        })
        .collect()
}

/// Returns the `n` highest-grossing events, highest first.
///
/// Events with equal gross are ordered by name.
#[must_use]
pub fn top_events(summaries: &[EventSummary], n: usize) -> Vec<EventSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        b.total_gross
            .total_cmp(&a.total_gross)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(n);
    ranked
}
