//! Trend table data structures.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use marquee_types::{AxisMode, Metric, SeriesKey};
use serde::{Deserialize, Serialize};

use crate::TrendOptions;

/// Returns the consumer-facing column label for a series metric.
///
/// Raw columns are `"<series> - <metric>"`; moving-average columns carry an
/// `_avg` suffix.
#[must_use]
pub fn column_name(series: &SeriesKey, metric: Metric, averaged: bool) -> String {
    if averaged {
        format!("{series} - {metric}_avg")
    } else {
        format!("{series} - {metric}")
    }
}

/// A single metric value with its optional moving average.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Raw value summed over the row's bucket.
    pub value: f64,
    /// Trailing moving average, present once averaging has been applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

/// Revenue and ticket cells for one series in one row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesValues {
    /// Gross sales value.
    pub revenue: Cell,
    /// Tickets sold.
    pub tickets: Cell,
}

impl SeriesValues {
    /// Returns the cell for the given metric.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> &Cell {
        match metric {
            Metric::Revenue => &self.revenue,
            Metric::Tickets => &self.tickets,
        }
    }

    /// Returns the cell for the given metric mutably.
    pub const fn get_mut(&mut self, metric: Metric) -> &mut Cell {
        match metric {
            Metric::Revenue => &mut self.revenue,
            Metric::Tickets => &mut self.tickets,
        }
    }

    /// Adds one sale to the raw values.
    pub(crate) fn add_sale(&mut self, revenue: f64, tickets: u32) {
        self.revenue.value += revenue;
        self.tickets.value += f64::from(tickets);
    }
}

/// Row key of a trend table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    /// Calendar date.
    Date(NaiveDate),
    /// Whole days since each series' on-sale date.
    Offset(i64),
}

impl std::fmt::Display for AxisValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Offset(days) => write!(f, "{days}"),
        }
    }
}

/// One row of a trend table: a date (or day offset) and a value per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    /// Row key.
    pub axis: AxisValue,
    /// Values per series.
    #[serde(with = "series_entries")]
    pub values: BTreeMap<SeriesKey, SeriesValues>,
}

/// Serializes a per-series map as a list of `{series, revenue, tickets}`
/// entries, since JSON object keys can only be strings.
mod series_entries {
    use std::collections::BTreeMap;

    use marquee_types::SeriesKey;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Cell, SeriesValues};

    #[derive(Serialize)]
    struct EntryRef<'a> {
        series: &'a SeriesKey,
        revenue: &'a Cell,
        tickets: &'a Cell,
    }

    #[derive(Deserialize)]
    struct Entry {
        series: SeriesKey,
        revenue: Cell,
        tickets: Cell,
    }

    pub(super) fn serialize<S>(
        values: &BTreeMap<SeriesKey, SeriesValues>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().map(|(series, values)| EntryRef {
            series,
            revenue: &values.revenue,
            tickets: &values.tickets,
        }))
    }

    pub(super) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<SeriesKey, SeriesValues>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                let values = SeriesValues {
                    revenue: entry.revenue,
                    tickets: entry.tickets,
                };
                (entry.series, values)
            })
            .collect())
    }
}

impl TrendRow {
    /// Creates an empty row for the given axis value.
    #[must_use]
    pub const fn new(axis: AxisValue) -> Self {
        Self {
            axis,
            values: BTreeMap::new(),
        }
    }

    /// Returns the calendar date of the row, if it is keyed by date.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self.axis {
            AxisValue::Date(date) => Some(date),
            AxisValue::Offset(_) => None,
        }
    }

    /// Returns the raw value of a series metric, or 0 if the series is absent.
    #[must_use]
    pub fn value(&self, series: &SeriesKey, metric: Metric) -> f64 {
        self.values
            .get(series)
            .map_or(0.0, |values| values.get(metric).value)
    }

    /// Returns the moving average of a series metric, if one was computed.
    #[must_use]
    pub fn average(&self, series: &SeriesKey, metric: Metric) -> Option<f64> {
        self.values
            .get(series)
            .and_then(|values| values.get(metric).average)
    }

    /// Returns the values for a series, inserting zeros if it is absent.
    pub fn series_mut(&mut self, series: &SeriesKey) -> &mut SeriesValues {
        self.values.entry(series.clone()).or_default()
    }

    /// Returns true if any series in the row carries an average for `metric`.
    #[must_use]
    pub fn has_average(&self, metric: Metric) -> bool {
        self.values
            .values()
            .any(|values| values.get(metric).average.is_some())
    }
}

/// Inserts zero values for every known series missing from a row.
pub(crate) fn fill_missing(rows: &mut [TrendRow], series_keys: &BTreeSet<SeriesKey>) {
    for row in rows {
        for series in series_keys {
            row.series_mut(series);
        }
    }
}

/// The date a series first recorded a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnSaleDate {
    /// The series.
    pub series: SeriesKey,
    /// Earliest transaction date seen for the series.
    pub first_date: NaiveDate,
}

/// Chart-ready trend view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Row keying used by `rows`.
    pub axis_mode: AxisMode,
    /// Metric the view was prepared for.
    pub metric: Metric,
    /// Moving-average window (0 when no averaging was applied).
    pub window: usize,
    /// Trend rows in ascending axis order.
    pub rows: Vec<TrendRow>,
    /// Every series seen in the input.
    pub series_keys: BTreeSet<SeriesKey>,
    /// One on-sale date per series, ordered by series.
    pub on_sale_dates: Vec<OnSaleDate>,
}

impl ViewModel {
    /// Creates a view with no rows for the given options.
    #[must_use]
    pub const fn empty(options: &TrendOptions) -> Self {
        Self {
            axis_mode: options.axis,
            metric: options.metric,
            window: options.window,
            rows: Vec::new(),
            series_keys: BTreeSet::new(),
            on_sale_dates: Vec::new(),
        }
    }

    /// Returns true if the view has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if rows carry moving-average values.
    #[must_use]
    pub const fn is_averaged(&self) -> bool {
        self.window > 0
    }

    /// Returns the on-sale date of a series.
    #[must_use]
    pub fn on_sale_date(&self, series: &SeriesKey) -> Option<NaiveDate> {
        self.on_sale_dates
            .iter()
            .find(|entry| &entry.series == series)
            .map(|entry| entry.first_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> SeriesKey {
        SeriesKey::new(name, "19:30")
    }

    #[test]
    fn test_column_name() {
        let series = key("Hamlet");
        assert_eq!(column_name(&series, Metric::Revenue, false), "Hamlet - 19:30 - revenue");
        assert_eq!(column_name(&series, Metric::Tickets, true), "Hamlet - 19:30 - tickets_avg");
    }

    #[test]
    fn test_fill_missing() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut rows = vec![TrendRow::new(AxisValue::Date(date))];
        rows[0].series_mut(&key("A")).add_sale(10.0, 1);

        let keys: BTreeSet<_> = [key("A"), key("B")].into_iter().collect();
        fill_missing(&mut rows, &keys);

        assert_eq!(rows[0].values.len(), 2);
        assert_eq!(rows[0].value(&key("A"), Metric::Revenue), 10.0);
        assert_eq!(rows[0].value(&key("B"), Metric::Tickets), 0.0);
    }

    #[test]
    fn test_row_serde_keeps_series_with_shared_label_apart() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let left = SeriesKey::new("A - B", "C");
        let right = SeriesKey::new("A", "B - C");
        let mut row = TrendRow::new(AxisValue::Date(date));
        row.series_mut(&left).add_sale(10.0, 1);
        row.series_mut(&right).add_sale(20.0, 2);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["axis"], "2024-01-01");
        assert_eq!(json["values"].as_array().unwrap().len(), 2);

        let back: TrendRow = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
        assert_eq!(back.value(&right, Metric::Tickets), 2.0);
    }

    #[test]
    fn test_axis_value_order_and_display() {
        let early = AxisValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let late = AxisValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!(early < late);
        assert_eq!(early.to_string(), "2024-01-01");
        assert_eq!(AxisValue::Offset(4).to_string(), "4");
    }
}
