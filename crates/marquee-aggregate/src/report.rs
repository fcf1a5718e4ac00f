//! Snapshot KPIs for a single event.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use marquee_types::{Lookback, ParseError, SaleRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ShowtimeSummary, summarize_showtimes};

/// Sales consolidated for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Calendar day.
    pub date: NaiveDate,
    /// Tickets sold that day.
    pub tickets: u64,
    /// Gross value that day.
    pub gross: f64,
}

/// Key performance indicators of one event as of a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventReport {
    /// Event name.
    pub event: String,
    /// Day the report was computed for.
    pub as_of: NaiveDate,
    /// Total gross value to date.
    pub total_box_office: f64,
    /// Total tickets sold to date.
    pub total_tickets: u64,
    /// Seat capacity across all performances.
    pub capacity: u64,
    /// Tickets sold over capacity (0 when capacity is unknown).
    pub occupancy: f64,
    /// Capacity not yet sold (0 when capacity is unknown or sold out).
    pub tickets_remaining: u64,
    /// Average ticket price (0 when nothing was sold).
    pub atp: f64,
    /// Gross value transacted on `as_of`.
    pub gross_today: f64,
    /// Tickets transacted on `as_of`.
    pub tickets_today: u64,
    /// Gross value transacted the day before `as_of`.
    pub gross_last_day: f64,
    /// Tickets transacted the day before `as_of`.
    pub tickets_last_day: u64,
    /// Average ticket price of the day before `as_of` (0 when nothing was sold).
    pub atp_last_day: f64,
    /// Lifetime totals per showtime, ordered by showtime.
    pub showtimes: Vec<ShowtimeSummary>,
    /// Daily totals over the trailing week, newest first.
    pub recent_days: Vec<DailyTotals>,
}

impl EventReport {
    /// Days covered by [`EventReport::recent_days`], counted back from `as_of`.
    pub const RECENT_DAYS: u32 = 7;

    /// Computes the report for `event` from its sales rows.
    ///
    /// Records of other events are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a record of the event has a malformed date.
    pub fn compute(
        event: &str,
        records: &[SaleRecord],
        capacity: u64,
        as_of: NaiveDate,
    ) -> Result<Self, ParseError> {
        let recent = Lookback::days(Self::RECENT_DAYS);
        let mut total_box_office = 0.0;
        let mut total_tickets = 0_u64;
        let mut gross_today = 0.0;
        let mut tickets_today = 0_u64;
        let last_day = as_of.pred_opt();
        let mut gross_last_day = 0.0;
        let mut tickets_last_day = 0_u64;
        let mut days: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();

        for record in records.iter().filter(|r| r.event() == event) {
            let date = record.date()?;
            let tickets = u64::from(record.tickets);
            total_box_office += record.revenue;
            total_tickets += tickets;

            if date == as_of {
                gross_today += record.revenue;
                tickets_today += tickets;
            } else if Some(date) == last_day {
                gross_last_day += record.revenue;
                tickets_last_day += tickets;
            }
            if recent.contains(as_of, date) {
                let day = days.entry(date).or_insert(DailyTotals {
                    date,
                    tickets: 0,
                    gross: 0.0,
                });
                day.tickets += tickets;
                day.gross += record.revenue;
            }
        }

        let occupancy = if capacity > 0 {
            total_tickets as f64 / capacity as f64
        } else {
            0.0
        };
        let atp = average_price(total_box_office, total_tickets);

        debug!(event, total_tickets, capacity, "computed event report");

        Ok(Self {
            event: event.to_string(),
            as_of,
            total_box_office,
            total_tickets,
            capacity,
            occupancy,
            tickets_remaining: capacity.saturating_sub(total_tickets),
            atp,
            gross_today,
            tickets_today,
            gross_last_day,
            tickets_last_day,
            atp_last_day: average_price(gross_last_day, tickets_last_day),
            showtimes: summarize_showtimes(records, event),
            recent_days: days.into_values().rev().collect(),
        })
    }
}

fn average_price(gross: f64, tickets: u64) -> f64 {
    if tickets > 0 {
        gross / tickets as f64
    } else {
        0.0
    }
}
