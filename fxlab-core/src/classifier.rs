//! Classifier output interface.
//!
//! The pipeline never depends on how an up/down classifier is built or
//! trained, only on its output: one probability pair per evaluation-window
//! day, summing to 1. Anything that can produce that (a trained recurrent
//! network, a logistic fit, the trailing-frequency stand-in in the runner)
//! plugs in behind [`ProbabilityModel`].

use serde::{Deserialize, Serialize};

use crate::domain::DailyRecord;

/// Class probabilities for a single day: P(non-positive return) and
/// P(positive return). The producer is responsible for `p_down + p_up == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbs {
    pub p_down: f64,
    pub p_up: f64,
}

impl ClassProbs {
    /// Probability edge in favor of an up day: p_up − p_down.
    ///
    /// Ranges over [−1, 1] for a valid pair; 0 means the classifier is
    /// indifferent.
    pub fn edge(&self) -> f64 {
        self.p_up - self.p_down
    }
}

/// A source of per-day class probabilities for an evaluation window.
///
/// `history` is the training window immediately preceding `window`, in
/// chronological order; implementations may use it for look-back context
/// (the first window days have no preceding window days to look at).
pub trait ProbabilityModel {
    /// Human-readable model name, used in run summaries.
    fn name(&self) -> &'static str;

    /// One probability pair per day of `window`, aligned by position.
    fn predict(&self, history: &[DailyRecord], window: &[DailyRecord]) -> Vec<ClassProbs>;
}
