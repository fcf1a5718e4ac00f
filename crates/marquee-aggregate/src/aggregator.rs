//! Sales-to-trend aggregation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use marquee_types::{AxisMode, Metric, ParseError, SaleRecord, SeriesKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::row::fill_missing;
use crate::{AxisValue, OnSaleDate, TrendRow, ViewModel};

/// Options controlling how a trend view is prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendOptions {
    /// Metric the view is prepared for.
    pub metric: Metric,
    /// Trailing moving-average window in rows (0 disables averaging).
    pub window: usize,
    /// Row keying of the output.
    pub axis: AxisMode,
}

impl TrendOptions {
    /// Creates options for a daily calendar view of revenue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            metric: Metric::Revenue,
            window: 0,
            axis: AxisMode::Calendar,
        }
    }

    /// Sets the metric.
    #[must_use]
    pub const fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the moving-average window.
    #[must_use]
    pub const fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the axis mode.
    #[must_use]
    pub const fn with_axis(mut self, axis: AxisMode) -> Self {
        self.axis = axis;
        self
    }
}

/// Builds chart-ready trend views from flat sales rows.
///
/// The pipeline is `bucket_by_date`, then `apply_moving_average` when a
/// window is set, then `normalize_axis` for the days-on-sale axis. Every stage
/// is a pure function of its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAggregator {
    options: TrendOptions,
}

impl TrendAggregator {
    /// Creates a new aggregator with the given options.
    #[must_use]
    pub const fn new(options: TrendOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &TrendOptions {
        &self.options
    }

    /// Runs the full pipeline over `records`.
    ///
    /// Empty input yields an empty view.
    ///
    /// # Errors
    ///
    /// Returns an error if any record has a malformed transaction date. No
    /// partial view is produced in that case.
    pub fn build(&self, records: &[SaleRecord]) -> Result<ViewModel, ParseError> {
        let options = self.options;
        if records.is_empty() {
            return Ok(ViewModel::empty(&options));
        }

        let (rows, series_keys) = Self::bucket_by_date(records)?;
        let on_sale_dates = Self::compute_on_sale_dates(records)?;
        let rows = Self::apply_moving_average(rows, &series_keys, options.window);
        let rows = match options.axis {
            AxisMode::Calendar => rows,
            AxisMode::Normalized => {
                Self::normalize_axis(&rows, &on_sale_dates, options.metric, options.window > 0)
            }
        };

        debug!(
            records = records.len(),
            rows = rows.len(),
            series = series_keys.len(),
            axis = %options.axis,
            window = options.window,
            "built trend view"
        );

        Ok(ViewModel {
            axis_mode: options.axis,
            metric: options.metric,
            window: options.window,
            rows,
            series_keys,
            on_sale_dates,
        })
    }

    /// Groups records by calendar day and sums revenue and tickets per series.
    ///
    /// Every returned row holds a value for every series seen in `records`
    /// (zero where the series had no sales that day). Rows are strictly
    /// ascending by date.
    ///
    /// # Errors
    ///
    /// Returns an error on the first record whose date cannot be parsed.
    pub fn bucket_by_date(
        records: &[SaleRecord],
    ) -> Result<(Vec<TrendRow>, BTreeSet<SeriesKey>), ParseError> {
        let mut buckets: BTreeMap<NaiveDate, TrendRow> = BTreeMap::new();
        let mut series_keys = BTreeSet::new();

        for record in records {
            let date = record.date()?;
            if !series_keys.contains(&record.series) {
                series_keys.insert(record.series.clone());
            }
            buckets
                .entry(date)
                .or_insert_with(|| TrendRow::new(AxisValue::Date(date)))
                .series_mut(&record.series)
                .add_sale(record.revenue, record.tickets);
        }

        let mut rows: Vec<TrendRow> = buckets.into_values().collect();
        fill_missing(&mut rows, &series_keys);

        debug!(
            records = records.len(),
            dates = rows.len(),
            series = series_keys.len(),
            "bucketed sales by date"
        );

        Ok((rows, series_keys))
    }

    /// Returns the earliest transaction date of every series, ordered by series.
    ///
    /// # Errors
    ///
    /// Returns an error on the first record whose date cannot be parsed.
    pub fn compute_on_sale_dates(records: &[SaleRecord]) -> Result<Vec<OnSaleDate>, ParseError> {
        let mut first_dates: BTreeMap<&SeriesKey, NaiveDate> = BTreeMap::new();

        for record in records {
            let date = record.date()?;
            first_dates
                .entry(&record.series)
                .and_modify(|first| *first = (*first).min(date))
                .or_insert(date);
        }

        Ok(first_dates
            .into_iter()
            .map(|(series, first_date)| OnSaleDate {
                series: series.clone(),
                first_date,
            })
            .collect())
    }

    /// Adds a trailing moving average to every series metric.
    ///
    /// The average at row `i` covers rows `i + 1 - window ..= i`, clipped at
    /// the start of the sequence, so early rows average over fewer samples.
    /// Raw values are left untouched. A window of 0 returns `rows` unchanged.
    ///
    /// `rows` must already be in ascending order.
    #[must_use]
    pub fn apply_moving_average(
        mut rows: Vec<TrendRow>,
        series_keys: &BTreeSet<SeriesKey>,
        window: usize,
    ) -> Vec<TrendRow> {
        if window == 0 {
            return rows;
        }

        for series in series_keys {
            for &metric in Metric::all() {
                let raw: Vec<f64> = rows.iter().map(|row| row.value(series, metric)).collect();
                for (i, row) in rows.iter_mut().enumerate() {
                    let start = (i + 1).saturating_sub(window);
                    let samples = &raw[start..=i];
                    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
                    row.series_mut(series).get_mut(metric).average = Some(mean);
                }
            }
        }

        rows
    }

    /// Re-keys calendar rows by whole days since each series went on sale.
    ///
    /// A row dated `d` contributes to offset `d - first_date` of a series only
    /// when that offset is non-negative. Series without an on-sale date are
    /// skipped. Contributions landing on the same offset of the same series
    /// are summed; different series stay in their own columns. Only `metric`
    /// is carried over (with its average when `include_average` is set).
    ///
    /// Returns no rows when `on_sale_dates` is empty, or when averages are
    /// requested but the input carries none for `metric`. Rows already keyed
    /// by offset are ignored.
    #[must_use]
    pub fn normalize_axis(
        rows: &[TrendRow],
        on_sale_dates: &[OnSaleDate],
        metric: Metric,
        include_average: bool,
    ) -> Vec<TrendRow> {
        if on_sale_dates.is_empty() {
            return Vec::new();
        }
        if include_average && !rows.iter().any(|row| row.has_average(metric)) {
            debug!(%metric, "no moving averages to normalize");
            return Vec::new();
        }

        let mut buckets: BTreeMap<i64, TrendRow> = BTreeMap::new();
        for row in rows {
            let Some(date) = row.date() else {
                continue;
            };
            for on_sale in on_sale_dates {
                let offset = (date - on_sale.first_date).num_days();
                if offset < 0 {
                    continue;
                }
                let cell = buckets
                    .entry(offset)
                    .or_insert_with(|| TrendRow::new(AxisValue::Offset(offset)))
                    .series_mut(&on_sale.series)
                    .get_mut(metric);
                cell.value += row.value(&on_sale.series, metric);
                if include_average {
                    let average = row.average(&on_sale.series, metric).unwrap_or(0.0);
                    *cell.average.get_or_insert(0.0) += average;
                }
            }
        }

        let series_keys: BTreeSet<SeriesKey> = on_sale_dates
            .iter()
            .map(|entry| entry.series.clone())
            .collect();
        let mut normalized: Vec<TrendRow> = buckets.into_values().collect();
        fill_missing(&mut normalized, &series_keys);
        if include_average {
            for row in &mut normalized {
                for values in row.values.values_mut() {
                    values.get_mut(metric).average.get_or_insert(0.0);
                }
            }
        }

        debug!(
            input_rows = rows.len(),
            offsets = normalized.len(),
            series = series_keys.len(),
            "normalized trend axis"
        );

        normalized
    }
}
