//! Tick — the fundamental intraday market data unit.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One minute-resolution price observation for a single currency pair.
///
/// Source files also carry high/low/volume columns; those are dropped at
/// the loading boundary because daily aggregation only needs the open of
/// the earliest tick and the close of the latest tick of each day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub close: f64,
}

impl Tick {
    /// Basic price sanity check: both prices strictly positive and finite.
    ///
    /// NaN fails the comparison, so NaN prices are rejected here too.
    pub fn is_sane(&self) -> bool {
        self.open > 0.0 && self.open.is_finite() && self.close > 0.0 && self.close.is_finite()
    }
}
