//! Probability-threshold rule: buy when the classifier's up-edge clears a bar.

use crate::classifier::ClassProbs;

/// Single-day threshold rule: buy iff `p_up − p_down > threshold`.
///
/// Threshold 0 reduces to argmax classification. A positive threshold
/// demands a stronger up-vote, trading recall for precision on buy days;
/// a threshold ≥ 1 can never fire for a valid probability pair.
pub fn threshold_decision(probs: ClassProbs, threshold: f64) -> bool {
    probs.edge() > threshold
}

/// Vector form: one decision per probability pair, aligned by position.
pub fn threshold_decisions(probs: &[ClassProbs], threshold: f64) -> Vec<bool> {
    probs
        .iter()
        .map(|p| threshold_decision(*p, threshold))
        .collect()
}
