//! Artifact export — summary JSON, daily records CSV, equity-curve CSV.
//!
//! Each run gets its own directory under the output root, keyed by the
//! first 12 hex chars of the run id, so re-running an identical config
//! overwrites its own artifacts instead of piling up copies.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::result::{EquityPoint, RunOutput};
use fxlab_core::domain::DailyRecord;

/// Write the full artifact set for a run; returns the run directory.
pub fn save_artifacts(output: &RunOutput, out_dir: &Path) -> Result<PathBuf> {
    let short_id: String = output.summary.run_id.chars().take(12).collect();
    let run_dir = out_dir.join(short_id);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create run directory {}", run_dir.display()))?;

    write_summary_json(&run_dir.join("summary.json"), output)?;
    write_daily_csv(&run_dir.join("daily.csv"), &output.daily)?;
    write_equity_csv(&run_dir.join("equity.csv"), &output.equity)?;

    Ok(run_dir)
}

fn write_summary_json(path: &Path, output: &RunOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(&output.summary)
        .context("Failed to serialize run summary")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary {}", path.display()))?;
    Ok(())
}

/// Daily records as CSV: date,open,close,ret,month,day_of_month.
pub fn write_daily_csv(path: &Path, daily: &[DailyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create daily CSV {}", path.display()))?;
    for record in daily {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Equity curve as CSV: date,equity.
pub fn write_equity_csv(path: &Path, equity: &[EquityPoint]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create equity CSV {}", path.display()))?;
    writeln!(file, "date,equity")?;
    for point in equity {
        writeln!(file, "{},{:.4}", point.date, point.equity)?;
    }
    Ok(())
}
