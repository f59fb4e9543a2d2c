//! Seasonality and return-distribution statistics — pure functions.
//!
//! Every statistic is a pure function: daily records (or an equity curve)
//! in, summary out. No dependencies on the loader, runner, or policies.

use serde::{Deserialize, Serialize};

use fxlab_core::domain::DailyRecord;

/// Mean daily return for one calendar bucket (a month or a day-of-month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalBucket {
    /// Bucket key: month 1–12 or day-of-month 1–31.
    pub key: u32,
    /// Number of daily records in the bucket.
    pub count: usize,
    pub mean_return: f64,
}

/// Summary of a daily-return distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Fraction of days that closed above their open.
    pub up_fraction: f64,
}

impl DistributionSummary {
    /// Compute the summary over a set of daily records.
    ///
    /// An empty input yields an all-zero summary rather than an error:
    /// exploration code calls this on arbitrary slices.
    pub fn compute(days: &[DailyRecord]) -> Self {
        if days.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                up_fraction: 0.0,
            };
        }
        let returns: Vec<f64> = days.iter().map(|d| d.ret).collect();
        let ups = days.iter().filter(|d| d.is_up()).count();
        Self {
            count: days.len(),
            mean: mean_f64(&returns),
            std_dev: std_dev(&returns),
            min: returns.iter().cloned().fold(f64::INFINITY, f64::min),
            max: returns.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            up_fraction: ups as f64 / days.len() as f64,
        }
    }
}

// ─── Seasonality groupings ──────────────────────────────────────────

/// Mean daily return per calendar month, ascending by month.
///
/// Only months present in the input appear; a one-year dataset yields
/// up to 12 buckets.
pub fn mean_return_by_month(days: &[DailyRecord]) -> Vec<SeasonalBucket> {
    group_mean(days, |d| d.month)
}

/// Mean daily return per day-of-month (1–31), ascending by day.
pub fn mean_return_by_day_of_month(days: &[DailyRecord]) -> Vec<SeasonalBucket> {
    group_mean(days, |d| d.day_of_month)
}

fn group_mean(days: &[DailyRecord], key: impl Fn(&DailyRecord) -> u32) -> Vec<SeasonalBucket> {
    let mut sums: std::collections::BTreeMap<u32, (usize, f64)> = std::collections::BTreeMap::new();
    for day in days {
        let entry = sums.entry(key(day)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += day.ret;
    }
    sums.into_iter()
        .map(|(key, (count, sum))| SeasonalBucket {
            key,
            count,
            mean_return: sum / count as f64,
        })
        .collect()
}

// ─── Equity-curve statistics ────────────────────────────────────────

/// Maximum drawdown as a negative fraction (e.g., -0.15 = 15% drawdown).
///
/// Returns 0.0 if the curve is constant or monotonically increasing.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    if equity_curve.len() < 2 {
        return 0.0;
    }
    let mut peak = equity_curve[0];
    let mut max_dd = 0.0_f64;

    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
        }
        if peak > 0.0 {
            let dd = (eq - peak) / peak;
            if dd < max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}

// ─── Helpers ────────────────────────────────────────────────────────

pub(crate) fn mean_f64(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean_f64(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
