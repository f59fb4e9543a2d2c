//! Criterion benchmarks for FXLab hot paths.
//!
//! Benchmarks:
//! 1. Daily aggregation over a year of minute ticks
//! 2. Backtest evaluation over a year of daily records

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fxlab_core::aggregate::aggregate_daily;
use fxlab_core::backtest::{compound_profit, equity_curve};
use fxlab_core::domain::{DailyRecord, Tick};

// ── Helpers ──────────────────────────────────────────────────────────

/// Minute ticks for `days` consecutive days, `per_day` ticks each.
fn make_ticks(days: usize, per_day: usize) -> Vec<Tick> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2017, 1, 2).unwrap();
    let mut ticks = Vec::with_capacity(days * per_day);
    for d in 0..days {
        let date = base_date + chrono::Duration::days(d as i64);
        for m in 0..per_day {
            let price = 1.05 + ((d * per_day + m) as f64 * 0.01).sin() * 0.02;
            ticks.push(Tick {
                timestamp: date
                    .and_hms_opt((m / 60) as u32 % 24, (m % 60) as u32, 0)
                    .unwrap(),
                open: price,
                close: price + 0.0002,
            });
        }
    }
    ticks
}

fn make_window(days: usize) -> Vec<DailyRecord> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2017, 1, 2).unwrap();
    (0..days)
        .map(|i| {
            let open = 1.05 + (i as f64 * 0.1).sin() * 0.02;
            let close = open * (1.0 + (i as f64 * 0.3).cos() * 0.005);
            DailyRecord::from_prices(base_date + chrono::Duration::days(i as i64), open, close)
        })
        .collect()
}

// ── Benches ──────────────────────────────────────────────────────────

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_daily");
    for per_day in [60, 1440] {
        let ticks = make_ticks(252, per_day);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("252d_x_{per_day}")),
            &ticks,
            |b, ticks| b.iter(|| aggregate_daily(black_box(ticks)).unwrap()),
        );
    }
    group.finish();
}

fn bench_backtest(c: &mut Criterion) {
    let window = make_window(252);
    let decisions: Vec<bool> = (0..window.len()).map(|i| i % 3 != 0).collect();

    c.bench_function("compound_profit_252d", |b| {
        b.iter(|| compound_profit(black_box(&window), black_box(&decisions), 1000.0).unwrap())
    });
    c.bench_function("equity_curve_252d", |b| {
        b.iter(|| equity_curve(black_box(&window), black_box(&decisions), 1000.0).unwrap())
    });
}

criterion_group!(benches, bench_aggregate, bench_backtest);
criterion_main!(benches);
