//! FXLab Core — daily aggregation, decision policies, backtest evaluation.
//!
//! This crate contains the pure heart of the pipeline:
//! - Domain types (intraday ticks, aggregated daily records)
//! - Daily aggregator (earliest open / latest close per calendar day)
//! - Classifier output interface (per-day class probabilities)
//! - Decision policies (lag-1 momentum baseline, probability threshold)
//! - Compounding backtest evaluator over a decision vector
//!
//! Everything here is a pure transformation over immutable inputs; I/O
//! and orchestration live in `fxlab-runner`.

pub mod aggregate;
pub mod backtest;
pub mod classifier;
pub mod domain;
pub mod policy;
