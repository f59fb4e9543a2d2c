//! FXLab Runner — pipeline orchestration on top of `fxlab-core`.
//!
//! This crate builds on `fxlab-core` to provide:
//! - Tick loading from delimited minute files, with a synthetic fallback
//! - Seasonality and return-distribution statistics
//! - The trailing-frequency stand-in probability model
//! - Run configuration (TOML) with content-addressed run ids
//! - The end-to-end backtest pipeline and its result types
//! - Artifact export (summary JSON, daily CSV, equity CSV)

pub mod config;
pub mod export;
pub mod loader;
pub mod models;
pub mod result;
pub mod runner;
pub mod stats;
pub mod synthetic;

pub use config::{ConfigError, DataConfig, PolicyConfig, RunConfig};
pub use export::save_artifacts;
pub use loader::{dataset_hash, load_ticks, LoadError};
pub use models::TrailingFrequencyModel;
pub use result::{EquityPoint, RunOutput, RunSummary, SCHEMA_VERSION};
pub use runner::{run_from_ticks, run_pipeline, RunError};
pub use stats::{
    mean_return_by_day_of_month, mean_return_by_month, DistributionSummary, SeasonalBucket,
};
pub use synthetic::generate_synthetic_ticks;

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<RunConfig>();
        assert_sync::<RunConfig>();
    }

    #[test]
    fn result_types_are_send_sync() {
        assert_send::<RunSummary>();
        assert_sync::<RunSummary>();
        assert_send::<RunOutput>();
        assert_sync::<RunOutput>();
    }
}
