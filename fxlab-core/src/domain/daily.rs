//! DailyRecord — one aggregated open/close/return record per calendar day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Daily open/close prices and derived fields for a single calendar date.
///
/// Invariant (maintained by the aggregator): `open` comes from the
/// earliest tick of `date` and `close` from the latest tick of `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    /// Fractional daily return: close/open − 1.
    pub ret: f64,
    /// Calendar month of `date` (1–12), kept for seasonality grouping.
    pub month: u32,
    /// Day of month of `date` (1–31), kept for seasonality grouping.
    pub day_of_month: u32,
}

impl DailyRecord {
    /// Build a record from a date and its open/close prices, computing
    /// the derived fields. Callers must have validated `open > 0`.
    pub fn from_prices(date: NaiveDate, open: f64, close: f64) -> Self {
        Self {
            date,
            open,
            close,
            ret: close / open - 1.0,
            month: date.month(),
            day_of_month: date.day(),
        }
    }

    /// True if the day closed above its open.
    pub fn is_up(&self) -> bool {
        self.ret > 0.0
    }
}
