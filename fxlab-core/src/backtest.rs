//! Backtest evaluator — compounded profit over a decision vector.
//!
//! Given an evaluation window of daily records and one buy/skip decision
//! per day, the account takes a full position on "buy" days and stays in
//! cash otherwise. Skipped days contribute no factor at all: the policy
//! is "skip", not "hold at zero return". Numerically equivalent, but the
//! equity curve stays flat rather than being multiplied by 1.
//!
//! `decisions[i]` always pairs with `window[i]`; factors are applied in
//! index order, which is the window's chronological order.

use thiserror::Error;

use crate::domain::DailyRecord;

/// Errors from backtest evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BacktestError {
    #[error("decision vector length {decisions} does not match window length {window}")]
    DecisionLengthMismatch { decisions: usize, window: usize },

    #[error("principal must be positive, got {principal}")]
    NonPositivePrincipal { principal: f64 },
}

/// Compounded profit of taking a full position on each selected day.
///
/// profit = principal × Π over selected days of (1 + ret) − principal.
///
/// Returns a signed value; a loss comes back negative. An all-false
/// decision vector yields exactly 0 for any principal.
pub fn compound_profit(
    window: &[DailyRecord],
    decisions: &[bool],
    principal: f64,
) -> Result<f64, BacktestError> {
    validate(window, decisions, principal)?;

    let growth: f64 = window
        .iter()
        .zip(decisions)
        .filter(|(_, &buy)| buy)
        .map(|(day, _)| 1.0 + day.ret)
        .product();

    Ok(principal * growth - principal)
}

/// Step-by-step account value: the principal, then the value after each
/// day of the window. Skipped days leave the value unchanged.
///
/// The last point minus the principal equals [`compound_profit`].
pub fn equity_curve(
    window: &[DailyRecord],
    decisions: &[bool],
    principal: f64,
) -> Result<Vec<f64>, BacktestError> {
    validate(window, decisions, principal)?;

    let mut curve = Vec::with_capacity(window.len() + 1);
    let mut value = principal;
    curve.push(value);
    for (day, &buy) in window.iter().zip(decisions) {
        if buy {
            value *= 1.0 + day.ret;
        }
        curve.push(value);
    }
    Ok(curve)
}

fn validate(
    window: &[DailyRecord],
    decisions: &[bool],
    principal: f64,
) -> Result<(), BacktestError> {
    if decisions.len() != window.len() {
        return Err(BacktestError::DecisionLengthMismatch {
            decisions: decisions.len(),
            window: window.len(),
        });
    }
    if !(principal > 0.0) {
        return Err(BacktestError::NonPositivePrincipal { principal });
    }
    Ok(())
}
