//! Core types for the marquee box-office reporting toolkit.
//!
//! This crate provides the fundamental data structures used throughout marquee:
//!
//! - [`SaleRecord`] - A single sales row with date, series, revenue and tickets
//! - [`SeriesKey`] - Event + showtime combination tracked as one chart line
//! - [`Metric`] - Revenue or ticket count
//! - [`AxisMode`] - Calendar dates or days since on-sale
//! - [`Lookback`] - How far back a trend query reaches

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/marquee/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod lookback;
mod metric;
mod record;

pub use error::{MarqueeError, ParseError, Result};
pub use lookback::Lookback;
pub use metric::{AxisMode, Metric, MetricParseError};
pub use record::{SaleRecord, SeriesKey, parse_sale_date};
