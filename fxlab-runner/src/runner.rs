//! Pipeline runner — wires together loading, aggregation, policies, and
//! the evaluator.
//!
//! Two entry points:
//! - `run_pipeline()`: resolves the config's data source, then runs.
//!   Used by the CLI.
//! - `run_from_ticks()`: takes pre-loaded ticks — no I/O. Used by tests
//!   and by callers that already hold data in memory.

use thiserror::Error;

use fxlab_core::aggregate::{aggregate_daily, AggregateError};
use fxlab_core::backtest::{compound_profit, equity_curve, BacktestError};
use fxlab_core::classifier::ProbabilityModel;
use fxlab_core::domain::Tick;
use fxlab_core::policy::{momentum_decisions, threshold_decisions};

use crate::config::{ConfigError, DataConfig, PolicyConfig, RunConfig};
use crate::loader::{dataset_hash, load_ticks, LoadError};
use crate::models::TrailingFrequencyModel;
use crate::result::{EquityPoint, RunOutput, RunSummary, SCHEMA_VERSION};
use crate::stats::{max_drawdown, DistributionSummary};
use crate::synthetic::generate_synthetic_ticks;

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("aggregation error: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("backtest error: {0}")]
    Backtest(#[from] BacktestError),

    #[error("dataset has {day_count} daily records; need at least 2 to split train/eval")]
    WindowTooSmall { day_count: usize },
}

/// Run the full pipeline from a config, resolving its data source.
pub fn run_pipeline(config: &RunConfig) -> Result<RunOutput, RunError> {
    config.validate()?;

    let (ticks, source, has_synthetic) = match &config.data {
        DataConfig::Csv {
            path,
            delimiter,
            has_headers,
        } => {
            let ticks = load_ticks(path, delimiter.as_bytes()[0], *has_headers)?;
            (ticks, format!("csv:{}", path.display()), false)
        }
        DataConfig::Synthetic {
            pair,
            start,
            days,
            ticks_per_day,
        } => {
            eprintln!(
                "WARNING: using synthetic data for {pair} — results will be tagged as synthetic"
            );
            let ticks = generate_synthetic_ticks(pair, *start, *days, *ticks_per_day);
            (ticks, format!("synthetic:{pair}"), true)
        }
    };

    run_from_ticks(config, &ticks, &source, has_synthetic)
}

/// Run the pipeline on pre-loaded ticks — no I/O.
pub fn run_from_ticks(
    config: &RunConfig,
    ticks: &[Tick],
    source: &str,
    has_synthetic: bool,
) -> Result<RunOutput, RunError> {
    config.validate()?;

    let days = aggregate_daily(ticks)?;
    if days.len() < 2 {
        return Err(RunError::WindowTooSmall {
            day_count: days.len(),
        });
    }

    // Evaluation window is the tail of the dataset; both sides stay non-empty.
    let eval_len = ((days.len() as f64) * config.backtest.eval_split).round() as usize;
    let eval_len = eval_len.clamp(1, days.len() - 1);
    let split = days.len() - eval_len;
    let (train, eval) = days.split_at(split);

    let (decisions, policy, threshold, model) = match &config.policy {
        PolicyConfig::Momentum => {
            // The last training-day return seeds the first evaluation
            // decision (the documented bridge across the split).
            let prior = train.last().map(|d| d.ret);
            (
                momentum_decisions(eval, prior),
                "momentum".to_string(),
                None,
                None,
            )
        }
        PolicyConfig::Threshold {
            threshold,
            lookback,
        } => {
            let model = TrailingFrequencyModel::new(*lookback);
            let probs = model.predict(train, eval);
            (
                threshold_decisions(&probs, *threshold),
                "threshold".to_string(),
                Some(*threshold),
                Some(model.name().to_string()),
            )
        }
    };

    let principal = config.backtest.principal;
    let profit = compound_profit(eval, &decisions, principal)?;
    let curve = equity_curve(eval, &decisions, principal)?;

    let equity: Vec<EquityPoint> = eval
        .iter()
        .zip(curve.iter().skip(1))
        .map(|(day, &value)| EquityPoint {
            date: day.date,
            equity: value,
        })
        .collect();

    let summary = RunSummary {
        schema_version: SCHEMA_VERSION,
        run_id: config.run_id(),
        source: source.to_string(),
        has_synthetic,
        dataset_hash: dataset_hash(ticks),
        start_date: days.first().map(|d| d.date.to_string()).unwrap_or_default(),
        end_date: days.last().map(|d| d.date.to_string()).unwrap_or_default(),
        tick_count: ticks.len(),
        day_count: days.len(),
        train_days: train.len(),
        eval_days: eval.len(),
        policy,
        threshold,
        model,
        buy_days: decisions.iter().filter(|&&d| d).count(),
        principal,
        profit,
        final_equity: principal + profit,
        total_return: profit / principal,
        max_drawdown: max_drawdown(&curve),
        eval_distribution: DistributionSummary::compute(eval),
    };

    Ok(RunOutput {
        summary,
        daily: days,
        equity,
    })
}
