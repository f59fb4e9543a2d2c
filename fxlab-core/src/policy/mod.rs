//! Decision policies — pure functions from market context to buy/skip vectors.
//!
//! Two policies cover the repo's strategies:
//! - [`momentum::momentum_decisions`] — the lag-1 momentum baseline
//! - [`threshold::threshold_decisions`] — thresholded classifier probabilities
//!
//! Both produce a `Vec<bool>` aligned by position to the evaluation window
//! they were built for; the evaluator enforces the length match.

pub mod momentum;
pub mod threshold;

pub use momentum::momentum_decisions;
pub use threshold::{threshold_decision, threshold_decisions};
