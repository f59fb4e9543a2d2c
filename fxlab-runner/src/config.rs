//! Serializable run configuration.
//!
//! A `RunConfig` captures everything needed to reproduce a run: the data
//! source, the train/eval split, the decision policy, and the principal.
//! Its content hash doubles as the run id, so identical configs land in
//! the same artifact directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unique identifier for a run (content-addressable hash).
pub type RunId = String;

/// Errors from loading or validating a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("eval_split must be inside (0, 1), got {0}")]
    InvalidSplit(f64),

    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(f64),

    #[error("model lookback must be at least 1")]
    ZeroLookback,

    #[error("csv delimiter must be a single byte, got {0:?}")]
    BadDelimiter(String),
}

/// Complete configuration for a single backtest run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Where the ticks come from.
    pub data: DataConfig,

    /// Backtest window and capital settings.
    pub backtest: BacktestSettings,

    /// Decision policy for the evaluation window.
    pub policy: PolicyConfig,
}

/// Tick data source (serializable enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DataConfig {
    /// Delimited minute file: timestamp;open;high;low;close;volume,
    /// timestamps formatted `YYYYMMDD HHMMSS`.
    Csv {
        path: PathBuf,

        /// Field delimiter. Minute-history exports ship semicolons.
        #[serde(default = "default_delimiter")]
        delimiter: String,

        #[serde(default)]
        has_headers: bool,
    },

    /// Deterministic synthetic minute ticks, seeded from the pair name.
    Synthetic {
        #[serde(default = "default_pair")]
        pair: String,

        #[serde(default = "default_start")]
        start: chrono::NaiveDate,

        /// Trading days to generate (weekends are skipped).
        #[serde(default = "default_days")]
        days: usize,

        #[serde(default = "default_ticks_per_day")]
        ticks_per_day: usize,
    },
}

fn default_delimiter() -> String {
    ";".into()
}

fn default_pair() -> String {
    "EURUSD".into()
}

fn default_start() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2017, 1, 2).unwrap()
}

fn default_days() -> usize {
    365
}

fn default_ticks_per_day() -> usize {
    1440
}

/// Window split and capital settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BacktestSettings {
    /// Fraction of daily records held out as the evaluation window
    /// (taken from the end of the dataset).
    #[serde(default = "default_eval_split")]
    pub eval_split: f64,

    /// Starting capital, fully reinvested on selected days.
    #[serde(default = "default_principal")]
    pub principal: f64,
}

fn default_eval_split() -> f64 {
    0.25
}

fn default_principal() -> f64 {
    1000.0
}

impl Default for BacktestSettings {
    fn default() -> Self {
        Self {
            eval_split: default_eval_split(),
            principal: default_principal(),
        }
    }
}

/// Decision policy (serializable enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyConfig {
    /// Lag-1 momentum baseline: buy iff the previous day closed up.
    /// The first evaluation day is seeded from the last training day.
    Momentum,

    /// Thresholded probability model: buy iff p_up − p_down > threshold.
    Threshold {
        #[serde(default)]
        threshold: f64,

        /// Trailing window of the stand-in probability model.
        #[serde(default = "default_lookback")]
        lookback: usize,
    },
}

fn default_lookback() -> usize {
    20
}

impl RunConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let split = self.backtest.eval_split;
        if !(split > 0.0 && split < 1.0) {
            return Err(ConfigError::InvalidSplit(split));
        }
        if !(self.backtest.principal > 0.0) {
            return Err(ConfigError::NonPositivePrincipal(self.backtest.principal));
        }
        if let PolicyConfig::Threshold { lookback, .. } = self.policy {
            if lookback == 0 {
                return Err(ConfigError::ZeroLookback);
            }
        }
        if let DataConfig::Csv { delimiter, .. } = &self.data {
            if delimiter.as_bytes().len() != 1 {
                return Err(ConfigError::BadDelimiter(delimiter.clone()));
            }
        }
        Ok(())
    }

    /// Computes a deterministic hash id for this configuration.
    ///
    /// Two runs with identical configs get the same RunId and therefore
    /// the same artifact directory.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
