//! Lag-1 momentum baseline: buy today iff yesterday closed up.

use crate::domain::DailyRecord;

/// Build the baseline decision vector for an evaluation window.
///
/// `decisions[i]` is true iff the previous day's return was positive.
/// For `i == 0` there is no previous day inside the window, so the
/// look-back is an explicit parameter: callers that split a dataset into
/// training and evaluation windows pass the last training-day return in
/// `prior_return` to bridge the boundary; `None` leaves day 0 at skip.
pub fn momentum_decisions(window: &[DailyRecord], prior_return: Option<f64>) -> Vec<bool> {
    window
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i == 0 {
                prior_return.map(|r| r > 0.0).unwrap_or(false)
            } else {
                window[i - 1].is_up()
            }
        })
        .collect()
}
