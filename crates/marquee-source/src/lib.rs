//! Sales data sources for the marquee box-office reporting toolkit.
//!
//! This crate provides the input side of the reporting pipeline:
//!
//! - [`SalesSource`] - Async trait implemented by every data source
//! - [`SalesQuery`] - Date lower bound and event filter applied by sources
//! - [`MemorySource`] - Sales rows held in memory
//! - [`CsvSource`] - Normalized sales CSV read from disk

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/marquee/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod memory;
mod source;

pub use crate::csv::{CsvSource, read_sales};
pub use memory::MemorySource;
pub use source::{SalesQuery, SalesSource, SourceError};
