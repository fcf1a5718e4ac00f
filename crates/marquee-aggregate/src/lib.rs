//! Sales trend aggregation for the marquee box-office reporting toolkit.
//!
//! This crate turns flat sales rows into chart-ready views:
//!
//! - [`TrendAggregator`] - Date bucketing, moving averages and axis normalization
//! - [`TrendRow`] / [`ViewModel`] - Dense per-date (or per-offset) trend tables
//! - [`summarize_events`] / [`top_events`] - Per-event totals
//! - [`EventReport`] - Snapshot KPIs for a single event

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/marquee/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod report;
mod row;
mod summary;

pub use aggregator::{TrendAggregator, TrendOptions};
pub use report::{DailyTotals, EventReport};
pub use row::{AxisValue, Cell, OnSaleDate, SeriesValues, TrendRow, ViewModel, column_name};
pub use summary::{
    EventSummary, ShowtimeSummary, summarize_events, summarize_showtimes, top_events,
};
