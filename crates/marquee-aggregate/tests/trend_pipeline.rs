//! Pipeline-level properties of the trend aggregator.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use marquee_aggregate::{AxisValue, TrendAggregator, TrendOptions, ViewModel, column_name};
use marquee_types::{AxisMode, Metric, SaleRecord, SeriesKey};

fn show(name: &str, time: &str) -> SeriesKey {
    SeriesKey::new(name, time)
}

/// A small box-office run: two shows going on sale on different days, with
/// gaps in between.
fn season() -> Vec<SaleRecord> {
    vec![
        SaleRecord::new("2024-03-04T10:12:00", show("Hamlet", "19:30"), 420.0, 12),
        SaleRecord::new("2024-03-01T09:00:00", show("Hamlet", "19:30"), 300.0, 10),
        SaleRecord::new("2024-03-02", show("Hamlet", "14:30"), 90.0, 3),
        SaleRecord::new("2024-03-04", show("Cats", "20:00"), 150.0, 5),
        SaleRecord::new("2024-03-06", show("Cats", "20:00"), 75.0, 3),
        SaleRecord::new("2024-03-06", show("Hamlet", "19:30"), 60.0, 2),
        SaleRecord::new("2024-03-01T18:45:00", show("Hamlet", "19:30"), 30.0, 1),
    ]
}

fn build(options: TrendOptions) -> ViewModel {
    TrendAggregator::new(options).build(&season()).unwrap()
}

#[test]
fn rows_are_dense_and_strictly_ascending() {
    let view = build(TrendOptions::new());

    assert_eq!(view.series_keys.len(), 3);
    for row in &view.rows {
        for series in &view.series_keys {
            assert!(row.values.contains_key(series), "{series} missing on {}", row.axis);
        }
    }
    for pair in view.rows.windows(2) {
        assert!(pair[0].axis < pair[1].axis);
    }
    let first = &view.rows[0];
    assert_eq!(first.axis, AxisValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    assert_relative_eq!(first.value(&show("Hamlet", "19:30"), Metric::Revenue), 330.0);
    assert_relative_eq!(first.value(&show("Cats", "20:00"), Metric::Revenue), 0.0);
}

#[test]
fn on_sale_dates_one_per_series() {
    let view = build(TrendOptions::new());

    assert_eq!(view.on_sale_dates.len(), view.series_keys.len());
    assert_eq!(
        view.on_sale_date(&show("Cats", "20:00")),
        NaiveDate::from_ymd_opt(2024, 3, 4)
    );
    assert_eq!(
        view.on_sale_date(&show("Hamlet", "19:30")),
        NaiveDate::from_ymd_opt(2024, 3, 1)
    );
}

#[test]
fn first_average_equals_first_raw_value() {
    let view = build(TrendOptions::new().with_window(14));
    let first = &view.rows[0];

    for series in &view.series_keys {
        for &metric in Metric::all() {
            assert_relative_eq!(first.average(series, metric).unwrap(), first.value(series, metric));
        }
    }
}

#[test]
fn normalized_view_aligns_series_on_their_first_day() {
    let view = build(TrendOptions::new().with_axis(AxisMode::Normalized));

    let day_zero = &view.rows[0];
    assert_eq!(day_zero.axis, AxisValue::Offset(0));
    assert_relative_eq!(day_zero.value(&show("Hamlet", "19:30"), Metric::Revenue), 330.0);
    assert_relative_eq!(day_zero.value(&show("Cats", "20:00"), Metric::Revenue), 150.0);
    assert_relative_eq!(day_zero.value(&show("Hamlet", "14:30"), Metric::Revenue), 90.0);

    // Cats went on sale on the 4th, so the 6th is its day 2.
    let day_two = view
        .rows
        .iter()
        .find(|row| row.axis == AxisValue::Offset(2))
        .unwrap();
    assert_relative_eq!(day_two.value(&show("Cats", "20:00"), Metric::Revenue), 75.0);
}

#[test]
fn column_labels_follow_the_chart_convention() {
    let series = show("Hamlet", "19:30");
    assert_eq!(column_name(&series, Metric::Revenue, false), "Hamlet - 19:30 - revenue");
    assert_eq!(column_name(&series, Metric::Revenue, true), "Hamlet - 19:30 - revenue_avg");
}

#[test]
fn view_model_survives_json_roundtrip() {
    let mut records = season();
    records.push(SaleRecord::new("2024-03-03", show("Hamlet - Gala", "19:30"), 500.0, 4));
    records.push(SaleRecord::new("2024-03-05", show("Hamlet", "Gala - 19:30"), 250.0, 2));

    for axis in [AxisMode::Calendar, AxisMode::Normalized] {
        let view = TrendAggregator::new(TrendOptions::new().with_axis(axis))
            .build(&records)
            .unwrap();
        assert_eq!(view.series_keys.len(), 5);

        let json = serde_json::to_string(&view).unwrap();
        let back: ViewModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
