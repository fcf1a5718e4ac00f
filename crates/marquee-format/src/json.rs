//! JSON output format.

use marquee_aggregate::{AxisValue, EventSummary, TrendRow, ViewModel};
use serde_json::{Map, Value};
use std::io::Write;

use crate::{FormatError, Formatter, TrendColumn, trend_columns};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// Trend rows are written as flat objects: a `date` key holding the calendar
/// date (or the day offset for normalized views) plus one key per column.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_items<W: Write, T: serde::Serialize>(
        &self,
        items: &[T],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, items)?;
                } else {
                    serde_json::to_writer(&mut writer, items)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for item in items {
                    serde_json::to_writer(&mut writer, item)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}

/// Flattens a trend row into a chart-ready JSON object.
fn row_object(row: &TrendRow, columns: &[TrendColumn]) -> Value {
    let mut object = Map::with_capacity(columns.len() + 1);
    let axis = match row.axis {
        AxisValue::Date(_) => Value::from(row.axis.to_string()),
        AxisValue::Offset(days) => Value::from(days),
    };
    object.insert("date".to_string(), axis);
    for column in columns {
        object.insert(column.label.clone(), Value::from(column.value(row)));
    }
    Value::Object(object)
}

impl Formatter for JsonFormatter {
    fn write_trend<W: Write + Send>(&self, view: &ViewModel, writer: W) -> Result<(), FormatError> {
        let columns = trend_columns(view);
        let rows: Vec<Value> = view
            .rows
            .iter()
            .map(|row| row_object(row, &columns))
            .collect();
        self.write_items(&rows, writer)
    }

    fn write_events<W: Write + Send>(
        &self,
        events: &[EventSummary],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_items(events, writer)
    }
}
