//! Daily aggregator — collapses intraday ticks into one record per calendar day.
//!
//! For each distinct calendar date in the input:
//! - open  = open price of the tick with the minimum timestamp that day
//! - close = close price of the tick with the maximum timestamp that day
//! - ret   = close/open − 1, plus month / day-of-month for seasonality grouping
//!
//! Input order is not trusted: ticks are grouped by date and min/max
//! timestamps are tracked per group, so shuffled input produces the same
//! output. Records come back sorted by date ascending.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::{DailyRecord, Tick};

/// Errors from daily aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    #[error("tick sequence is empty")]
    EmptyTicks,

    #[error("non-positive price at {timestamp}: open={open}, close={close}")]
    NonPositivePrice {
        timestamp: NaiveDateTime,
        open: f64,
        close: f64,
    },
}

/// Per-date accumulator while scanning ticks.
struct DayAccum {
    first_ts: NaiveDateTime,
    open: f64,
    last_ts: NaiveDateTime,
    close: f64,
}

/// Aggregate intraday ticks into one `DailyRecord` per calendar date,
/// ordered by date ascending.
///
/// A date with a single tick yields open from that tick's open and close
/// from that tick's close; equal prices give a zero return, never an error.
///
/// Fails with [`AggregateError::EmptyTicks`] on an empty input and
/// [`AggregateError::NonPositivePrice`] if any tick carries a price that
/// is zero, negative, or non-finite.
pub fn aggregate_daily(ticks: &[Tick]) -> Result<Vec<DailyRecord>, AggregateError> {
    if ticks.is_empty() {
        return Err(AggregateError::EmptyTicks);
    }

    let mut days: BTreeMap<chrono::NaiveDate, DayAccum> = BTreeMap::new();

    for tick in ticks {
        if !tick.is_sane() {
            return Err(AggregateError::NonPositivePrice {
                timestamp: tick.timestamp,
                open: tick.open,
                close: tick.close,
            });
        }

        let date = tick.timestamp.date();
        days.entry(date)
            .and_modify(|acc| {
                if tick.timestamp < acc.first_ts {
                    acc.first_ts = tick.timestamp;
                    acc.open = tick.open;
                }
                // `>=` keeps the later of two ticks sharing a timestamp
                if tick.timestamp >= acc.last_ts {
                    acc.last_ts = tick.timestamp;
                    acc.close = tick.close;
                }
            })
            .or_insert_with(|| DayAccum {
                first_ts: tick.timestamp,
                open: tick.open,
                last_ts: tick.timestamp,
                close: tick.close,
            });
    }

    // BTreeMap iteration is already date-ascending
    Ok(days
        .into_iter()
        .map(|(date, acc)| DailyRecord::from_prices(date, acc.open, acc.close))
        .collect())
}
