//! Result types for a single pipeline run.

use serde::{Deserialize, Serialize};

use crate::stats::DistributionSummary;
use fxlab_core::domain::DailyRecord;

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// One point of the evaluation-window equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: chrono::NaiveDate,
    pub equity: f64,
}

/// Serializable summary of a run: everything the CLI prints and the
/// artifact directory records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Content-addressed id of the originating config.
    pub run_id: String,
    /// Human-readable data source ("csv:<path>" or "synthetic:<pair>").
    pub source: String,
    pub has_synthetic: bool,
    /// BLAKE3 over the loaded ticks, pinning which data produced this.
    pub dataset_hash: String,
    pub start_date: String,
    pub end_date: String,
    pub tick_count: usize,
    pub day_count: usize,
    pub train_days: usize,
    pub eval_days: usize,
    pub policy: String,
    /// Threshold of the probability rule; None for the momentum baseline.
    pub threshold: Option<f64>,
    /// Probability model name; None for the momentum baseline.
    pub model: Option<String>,
    pub buy_days: usize,
    pub principal: f64,
    pub profit: f64,
    pub final_equity: f64,
    /// profit / principal.
    pub total_return: f64,
    pub max_drawdown: f64,
    /// Return distribution of the evaluation window.
    pub eval_distribution: DistributionSummary,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Full output of a run: the summary plus the series the report and
/// artifact writers consume.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub summary: RunSummary,
    /// All aggregated daily records (training + evaluation).
    pub daily: Vec<DailyRecord>,
    /// Equity after each evaluation day.
    pub equity: Vec<EquityPoint>,
}
