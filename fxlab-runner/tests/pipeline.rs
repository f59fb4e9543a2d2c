//! Integration tests for the pipeline: minute CSV in, profit out.
//!
//! Writes small semicolon-delimited fixtures, runs both policies through
//! `run_pipeline`, and checks the numbers end to end.

use std::io::Write;
use std::path::PathBuf;

use fxlab_runner::config::{BacktestSettings, DataConfig, PolicyConfig, RunConfig};
use fxlab_runner::runner::{run_pipeline, RunError};
use fxlab_runner::save_artifacts;

/// Minute rows for consecutive days: two ticks per day, so the daily
/// open comes from the 00:00 tick and the close from the 23:59 tick.
fn write_fixture(day_prices: &[(f64, f64)]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for (i, (open, close)) in day_prices.iter().enumerate() {
        let date = chrono::NaiveDate::from_ymd_opt(2017, 1, 2).unwrap()
            + chrono::Duration::days(i as i64);
        let d = date.format("%Y%m%d");
        writeln!(file, "{d} 000000;{open};{open};{open};{open};0").unwrap();
        writeln!(file, "{d} 235900;{close};{close};{close};{close};0").unwrap();
    }
    file.flush().unwrap();
    file
}

fn csv_config(path: PathBuf, policy: PolicyConfig, eval_split: f64) -> RunConfig {
    RunConfig {
        data: DataConfig::Csv {
            path,
            delimiter: ";".into(),
            has_headers: false,
        },
        backtest: BacktestSettings {
            eval_split,
            principal: 1000.0,
        },
        policy,
    }
}

#[test]
fn momentum_pipeline_over_csv_fixture() {
    // 8 days: six training days ending up, then +2% and +3% eval days.
    let file = write_fixture(&[
        (1.00, 1.01),
        (1.01, 1.00),
        (1.00, 1.01),
        (1.01, 1.00),
        (1.00, 1.01),
        (1.00, 1.01),
        (1.00, 1.02),
        (1.00, 1.03),
    ]);

    let config = csv_config(file.path().to_path_buf(), PolicyConfig::Momentum, 0.25);
    let out = run_pipeline(&config).unwrap();

    assert_eq!(out.summary.day_count, 8);
    assert_eq!(out.summary.eval_days, 2);
    assert_eq!(out.summary.tick_count, 16);
    assert!(!out.summary.has_synthetic);

    // Train ends up → buy day 7 (+2%); day 7 up → buy day 8 (+3%).
    let expected = 1000.0 * (1.02 * 1.03) - 1000.0;
    assert!((out.summary.profit - expected).abs() < 1e-6);
    assert!((out.summary.total_return - expected / 1000.0).abs() < 1e-9);
}

#[test]
fn threshold_pipeline_over_csv_fixture() {
    // Uniformly up history: the trailing-frequency model leans up, so a
    // moderate threshold still buys every evaluation day.
    let file = write_fixture(&[
        (1.00, 1.01),
        (1.00, 1.01),
        (1.00, 1.01),
        (1.00, 1.01),
        (1.00, 1.01),
        (1.00, 1.01),
        (1.00, 1.02),
        (1.00, 1.01),
    ]);

    let config = csv_config(
        file.path().to_path_buf(),
        PolicyConfig::Threshold {
            threshold: 0.5,
            lookback: 5,
        },
        0.25,
    );
    let out = run_pipeline(&config).unwrap();

    assert_eq!(out.summary.policy, "threshold");
    assert_eq!(out.summary.threshold, Some(0.5));
    assert_eq!(out.summary.buy_days, 2);
    let expected = 1000.0 * (1.02 * 1.01) - 1000.0;
    assert!((out.summary.profit - expected).abs() < 1e-6);
}

#[test]
fn synthetic_pipeline_is_reproducible() {
    let config = RunConfig {
        data: DataConfig::Synthetic {
            pair: "EURUSD".into(),
            start: chrono::NaiveDate::from_ymd_opt(2017, 1, 2).unwrap(),
            days: 60,
            ticks_per_day: 24,
        },
        backtest: BacktestSettings::default(),
        policy: PolicyConfig::Momentum,
    };

    let first = run_pipeline(&config).unwrap();
    let second = run_pipeline(&config).unwrap();

    assert!(first.summary.has_synthetic);
    assert_eq!(first.summary.dataset_hash, second.summary.dataset_hash);
    assert_eq!(first.summary.profit, second.summary.profit);
    assert_eq!(first.summary.day_count, 60);
}

#[test]
fn pipeline_artifacts_land_on_disk() {
    let file = write_fixture(&[(1.00, 1.01), (1.00, 1.02), (1.00, 1.01), (1.00, 1.03)]);
    let config = csv_config(file.path().to_path_buf(), PolicyConfig::Momentum, 0.25);
    let out = run_pipeline(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let run_dir = save_artifacts(&out, dir.path()).unwrap();

    assert!(run_dir.join("summary.json").exists());
    assert!(run_dir.join("daily.csv").exists());
    assert!(run_dir.join("equity.csv").exists());
}

#[test]
fn missing_csv_fails_with_load_error() {
    let config = csv_config(
        PathBuf::from("/nonexistent/ticks.csv"),
        PolicyConfig::Momentum,
        0.25,
    );
    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, RunError::Load(_)));
}

#[test]
fn corrupt_price_fails_with_aggregate_error() {
    // Parseable file, but a zero price: the loader passes it through and
    // the aggregator rejects it.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "20170102 000000;1.00;1.00;1.00;1.01;0").unwrap();
    writeln!(file, "20170103 000000;0.0;1.00;1.00;1.01;0").unwrap();
    file.flush().unwrap();

    let config = csv_config(file.path().to_path_buf(), PolicyConfig::Momentum, 0.25);
    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, RunError::Aggregate(_)));
}

#[test]
fn single_day_csv_fails_with_window_too_small() {
    let file = write_fixture(&[(1.00, 1.01)]);
    let config = csv_config(file.path().to_path_buf(), PolicyConfig::Momentum, 0.25);
    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, RunError::WindowTooSmall { day_count: 1 }));
}
