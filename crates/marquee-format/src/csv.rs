//! CSV output format.

use marquee_aggregate::{EventSummary, ViewModel};
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter, trend_columns};

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field if it contains the delimiter, a quote or a line break.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_trend<W: Write + Send>(
        &self,
        view: &ViewModel,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let columns = trend_columns(view);

        if self.include_header {
            write!(writer, "date")?;
            for column in &columns {
                write!(writer, "{d}{}", self.escape(&column.label))?;
            }
            writeln!(writer)?;
        }

        for row in &view.rows {
            write!(writer, "{}", row.axis)?;
            for column in &columns {
                write!(writer, "{d}{}", column.value(row))?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn write_events<W: Write + Send>(
        &self,
        events: &[EventSummary],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "event{d}total_gross{d}total_tickets{d}atp")?;
        }

        for event in events {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{:.2}",
                self.escape(&event.name),
                event.total_gross,
                event.total_tickets,
                event.atp()
            )?;
        }

        Ok(())
    }
}
