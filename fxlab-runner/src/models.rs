//! Stand-in probability model: trailing frequency of up days.
//!
//! The pipeline is written against `fxlab_core::classifier::ProbabilityModel`
//! so that a trained classifier can drop in. This module supplies the
//! simplest implementation that produces honest probability pairs: p_up
//! for a day is the fraction of up days among the trailing `lookback`
//! records, bridging into the training window at the evaluation boundary.

use fxlab_core::classifier::{ClassProbs, ProbabilityModel};
use fxlab_core::domain::DailyRecord;

/// Probabilities are clamped into [CLAMP, 1 − CLAMP] so the model never
/// claims certainty off a short sample.
const CLAMP: f64 = 0.05;

/// Estimates P(up) as the up-day frequency over a trailing window.
#[derive(Debug, Clone)]
pub struct TrailingFrequencyModel {
    pub lookback: usize,
}

impl TrailingFrequencyModel {
    pub fn new(lookback: usize) -> Self {
        Self { lookback }
    }

    /// P(up) from the trailing records available before a given day:
    /// the last `lookback` entries of `history ++ window[..i]`.
    fn p_up(&self, history: &[DailyRecord], window: &[DailyRecord], i: usize) -> f64 {
        let tail: Vec<&DailyRecord> = history
            .iter()
            .chain(window[..i].iter())
            .rev()
            .take(self.lookback)
            .collect();

        if tail.is_empty() {
            return 0.5; // no evidence either way
        }
        let ups = tail.iter().filter(|d| d.is_up()).count();
        (ups as f64 / tail.len() as f64).clamp(CLAMP, 1.0 - CLAMP)
    }
}

impl ProbabilityModel for TrailingFrequencyModel {
    fn name(&self) -> &'static str {
        "trailing_frequency"
    }

    fn predict(&self, history: &[DailyRecord], window: &[DailyRecord]) -> Vec<ClassProbs> {
        (0..window.len())
            .map(|i| {
                let p_up = self.p_up(history, window, i);
                ClassProbs {
                    p_down: 1.0 - p_up,
                    p_up,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window_from_returns(returns: &[f64]) -> Vec<DailyRecord> {
        let base = NaiveDate::from_ymd_opt(2017, 7, 3).unwrap();
        returns
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let date = base + chrono::Duration::days(i as i64);
                DailyRecord::from_prices(date, 1.0, 1.0 + r)
            })
            .collect()
    }

    #[test]
    fn one_pair_per_window_day_summing_to_one() {
        let history = window_from_returns(&[0.01, -0.01, 0.02]);
        let window = window_from_returns(&[0.005, -0.002, 0.001, 0.0]);
        let model = TrailingFrequencyModel::new(3);

        let probs = model.predict(&history, &window);
        assert_eq!(probs.len(), window.len());
        for p in &probs {
            assert!((p.p_down + p.p_up - 1.0).abs() < 1e-12);
            assert!(p.p_up >= CLAMP && p.p_up <= 1.0 - CLAMP);
        }
    }

    #[test]
    fn all_up_history_is_clamped_not_certain() {
        let history = window_from_returns(&[0.01; 10]);
        let window = window_from_returns(&[0.01]);
        let model = TrailingFrequencyModel::new(5);

        let probs = model.predict(&history, &window);
        assert!((probs[0].p_up - (1.0 - CLAMP)).abs() < 1e-12);
    }

    #[test]
    fn no_evidence_is_indifferent() {
        let window = window_from_returns(&[0.01, 0.02]);
        let model = TrailingFrequencyModel::new(5);

        let probs = model.predict(&[], &window);
        assert_eq!(probs[0].p_up, 0.5);
        // day 1 sees day 0 (an up day) → leans up
        assert!(probs[1].p_up > 0.5);
    }

    #[test]
    fn lookback_bridges_the_window_boundary() {
        // History ends with downs; window starts with ups. Early window
        // days should still feel the down history.
        let history = window_from_returns(&[-0.01, -0.01, -0.01]);
        let window = window_from_returns(&[0.01, 0.01, 0.01, 0.01]);
        let model = TrailingFrequencyModel::new(3);

        let probs = model.predict(&history, &window);
        assert!((probs[0].p_up - CLAMP).abs() < 1e-12); // 0/3 up, clamped
        assert!(probs[1].p_up < 0.5); // 1/3 up
        assert!(probs[3].p_up > 0.5); // 3/3 up, clamped high
    }

    #[test]
    fn mixed_history_gives_the_exact_frequency() {
        let history = window_from_returns(&[0.01, -0.01, 0.01, -0.01, 0.01]);
        let window = window_from_returns(&[0.0]);
        let model = TrailingFrequencyModel::new(5);

        let probs = model.predict(&history, &window);
        assert!((probs[0].p_up - 0.6).abs() < 1e-12);
    }
}
