//! FXLab CLI — aggregate, stats, and run commands.
//!
//! Commands:
//! - `aggregate` — collapse a minute file into daily open/close records
//! - `stats` — seasonality and return-distribution tables for a minute file
//! - `run` — execute a backtest from a TOML config file or from flags

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fxlab_core::aggregate::aggregate_daily;
use fxlab_core::domain::Tick;
use fxlab_runner::config::{BacktestSettings, DataConfig, PolicyConfig, RunConfig};
use fxlab_runner::export::write_daily_csv;
use fxlab_runner::runner::run_pipeline;
use fxlab_runner::stats::{
    mean_return_by_day_of_month, mean_return_by_month, DistributionSummary,
};
use fxlab_runner::{load_ticks, save_artifacts, RunSummary};

#[derive(Parser)]
#[command(
    name = "fxlab",
    about = "FXLab CLI — daily FX aggregation, seasonality, and up/down backtests"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a minute file into daily open/close/return records.
    Aggregate {
        /// Minute file (timestamp;open;high;low;close;volume, YYYYMMDD HHMMSS).
        input: PathBuf,

        /// Field delimiter.
        #[arg(long, default_value = ";")]
        delimiter: String,

        /// Skip a header row.
        #[arg(long, default_value_t = false)]
        has_headers: bool,

        /// Write the daily records as CSV here (summary prints either way).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print seasonality and return-distribution tables for a minute file.
    Stats {
        /// Minute file (timestamp;open;high;low;close;volume).
        input: PathBuf,

        /// Field delimiter.
        #[arg(long, default_value = ";")]
        delimiter: String,

        /// Skip a header row.
        #[arg(long, default_value_t = false)]
        has_headers: bool,
    },
    /// Execute a backtest from a TOML config file or from flags.
    Run {
        /// Path to a TOML config file (mutually exclusive with the flags below).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Minute file to backtest.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Use deterministic synthetic data for this pair instead of a file.
        #[arg(long)]
        synthetic: Option<String>,

        /// Field delimiter for --input.
        #[arg(long, default_value = ";")]
        delimiter: String,

        /// Skip a header row in --input.
        #[arg(long, default_value_t = false)]
        has_headers: bool,

        /// Decision policy: momentum or threshold.
        #[arg(long, default_value = "momentum")]
        policy: String,

        /// Probability threshold for the threshold policy.
        #[arg(long, default_value_t = 0.0)]
        threshold: f64,

        /// Trailing lookback of the probability model.
        #[arg(long, default_value_t = 20)]
        lookback: usize,

        /// Fraction of days held out as the evaluation window.
        #[arg(long, default_value_t = 0.25)]
        split: f64,

        /// Starting capital.
        #[arg(long, default_value_t = 1000.0)]
        principal: f64,

        /// Output directory for run artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate {
            input,
            delimiter,
            has_headers,
            output,
        } => run_aggregate(&input, &delimiter, has_headers, output.as_deref()),
        Commands::Stats {
            input,
            delimiter,
            has_headers,
        } => run_stats(&input, &delimiter, has_headers),
        Commands::Run {
            config,
            input,
            synthetic,
            delimiter,
            has_headers,
            policy,
            threshold,
            lookback,
            split,
            principal,
            output_dir,
        } => run_backtest_cmd(
            config, input, synthetic, delimiter, has_headers, policy, threshold, lookback, split,
            principal, output_dir,
        ),
    }
}

fn parse_delimiter(delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [b] => Ok(*b),
        _ => bail!("delimiter must be a single byte, got {delimiter:?}"),
    }
}

fn load_from_flags(input: &std::path::Path, delimiter: &str, has_headers: bool) -> Result<Vec<Tick>> {
    Ok(load_ticks(input, parse_delimiter(delimiter)?, has_headers)?)
}

fn run_aggregate(
    input: &std::path::Path,
    delimiter: &str,
    has_headers: bool,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let ticks = load_from_flags(input, delimiter, has_headers)?;
    let days = aggregate_daily(&ticks)?;

    println!("Ticks:  {}", ticks.len());
    println!("Days:   {}", days.len());
    println!(
        "Range:  {} to {}",
        days.first().map(|d| d.date.to_string()).unwrap_or_default(),
        days.last().map(|d| d.date.to_string()).unwrap_or_default()
    );

    if let Some(path) = output {
        write_daily_csv(path, &days)?;
        println!("Daily records written to: {}", path.display());
    }

    Ok(())
}

fn run_stats(input: &std::path::Path, delimiter: &str, has_headers: bool) -> Result<()> {
    let ticks = load_from_flags(input, delimiter, has_headers)?;
    let days = aggregate_daily(&ticks)?;

    let summary = DistributionSummary::compute(&days);
    println!("=== Daily Return Distribution ===");
    println!("Days:        {}", summary.count);
    println!("Mean:        {:+.4}%", summary.mean * 100.0);
    println!("Std Dev:     {:.4}%", summary.std_dev * 100.0);
    println!("Min:         {:+.4}%", summary.min * 100.0);
    println!("Max:         {:+.4}%", summary.max * 100.0);
    println!("Up Days:     {:.1}%", summary.up_fraction * 100.0);
    println!();

    println!("=== Mean Return by Month ===");
    println!("{:<8} {:>6} {:>12}", "Month", "Days", "Mean");
    for bucket in mean_return_by_month(&days) {
        println!(
            "{:<8} {:>6} {:>+11.4}%",
            bucket.key,
            bucket.count,
            bucket.mean_return * 100.0
        );
    }
    println!();

    println!("=== Mean Return by Day of Month ===");
    println!("{:<8} {:>6} {:>12}", "Day", "Days", "Mean");
    for bucket in mean_return_by_day_of_month(&days) {
        println!(
            "{:<8} {:>6} {:>+11.4}%",
            bucket.key,
            bucket.count,
            bucket.mean_return * 100.0
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_backtest_cmd(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    synthetic: Option<String>,
    delimiter: String,
    has_headers: bool,
    policy: String,
    threshold: f64,
    lookback: usize,
    split: f64,
    principal: f64,
    output_dir: PathBuf,
) -> Result<()> {
    // Validate mutually exclusive options
    if config_path.is_some() && (input.is_some() || synthetic.is_some()) {
        bail!("--config and --input/--synthetic are mutually exclusive");
    }

    let config = if let Some(path) = config_path {
        RunConfig::from_file(&path)?
    } else {
        let data = match (input, synthetic) {
            (Some(path), None) => DataConfig::Csv {
                path,
                delimiter,
                has_headers,
            },
            (None, Some(pair)) => DataConfig::Synthetic {
                pair,
                start: chrono::NaiveDate::from_ymd_opt(2017, 1, 2).unwrap(),
                days: 365,
                ticks_per_day: 1440,
            },
            (None, None) => bail!("one of --config, --input, or --synthetic is required"),
            (Some(_), Some(_)) => bail!("--input and --synthetic are mutually exclusive"),
        };

        let policy = match policy.as_str() {
            "momentum" => PolicyConfig::Momentum,
            "threshold" => PolicyConfig::Threshold {
                threshold,
                lookback,
            },
            other => bail!("unknown policy '{other}'. Valid: momentum, threshold"),
        };

        let config = RunConfig {
            data,
            backtest: BacktestSettings {
                eval_split: split,
                principal,
            },
            policy,
        };
        config.validate()?;
        config
    };

    let output = run_pipeline(&config)?;
    print_summary(&output.summary);

    let run_dir = save_artifacts(&output, &output_dir)?;
    println!("Artifacts saved to: {}", run_dir.display());

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("=== Backtest Result ===");
    println!("Source:         {}", summary.source);
    println!("Period:         {} to {}", summary.start_date, summary.end_date);
    println!(
        "Days:           {} ({} train / {} eval)",
        summary.day_count, summary.train_days, summary.eval_days
    );
    println!("Policy:         {}", summary.policy);
    if let Some(threshold) = summary.threshold {
        println!("Threshold:      {threshold:.3}");
    }
    if let Some(model) = &summary.model {
        println!("Model:          {model}");
    }
    println!("Buy Days:       {}/{}", summary.buy_days, summary.eval_days);
    println!();
    println!("--- Performance ---");
    println!("Principal:      {:.2}", summary.principal);
    println!("Profit:         {:+.2}", summary.profit);
    println!("Final Equity:   {:.2}", summary.final_equity);
    println!("Total Return:   {:+.2}%", summary.total_return * 100.0);
    println!("Max Drawdown:   {:.2}%", summary.max_drawdown * 100.0);
    println!(
        "Eval Up Days:   {:.1}%",
        summary.eval_distribution.up_fraction * 100.0
    );
    if summary.has_synthetic {
        println!();
        println!("WARNING: Results based on SYNTHETIC data");
    }
    println!();
}
