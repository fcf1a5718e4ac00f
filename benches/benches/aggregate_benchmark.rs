//! Trend aggregation benchmarks.
//!
//! Run with: `cargo bench --package marquee-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use marquee_bench::{BenchmarkConfig, synthetic_sales, write_csv};
use marquee_lib::{AxisMode, CsvSource, SalesQuery, TrendAggregator, TrendOptions, trend_view};
use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

/// Benchmark configurations for different data sizes.
fn benchmark_configs() -> Vec<(&'static str, BenchmarkConfig)> {
    vec![
        (
            "small",
            BenchmarkConfig {
                events: 4,
                show_times: 2,
                days: 60,
                sales_per_day: 3,
            },
        ),
        (
            "season",
            BenchmarkConfig {
                events: 20,
                show_times: 4,
                days: 180,
                sales_per_day: 5,
            },
        ),
    ]
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for (name, config) in benchmark_configs() {
        let records = synthetic_sales(&config);
        group.throughput(Throughput::Elements(records.len() as u64));

        let variants = [
            ("daily", TrendOptions::new()),
            ("moving-7", TrendOptions::new().with_window(7)),
            (
                "normalized-7",
                TrendOptions::new()
                    .with_window(7)
                    .with_axis(AxisMode::Normalized),
            ),
        ];

        for (variant, options) in variants {
            let aggregator = TrendAggregator::new(options);
            group.bench_with_input(BenchmarkId::new(variant, name), &records, |b, records| {
                b.iter(|| aggregator.build(records).unwrap());
            });
        }
    }

    group.finish();
}

fn csv_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("csv");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for (name, config) in benchmark_configs() {
        let records = synthetic_sales(&config);
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("sales.csv");
        write_csv(&records, BufWriter::new(File::create(&path).unwrap())).unwrap();

        group.throughput(Throughput::Elements(records.len() as u64));
        let source = CsvSource::new(&path);
        let options = TrendOptions::new().with_window(7);

        group.bench_function(BenchmarkId::new("trend-view", name), |b| {
            b.iter(|| {
                runtime
                    .block_on(trend_view(&source, &SalesQuery::all(), options))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, aggregate_benchmark, csv_benchmark);
criterion_main!(benches);
