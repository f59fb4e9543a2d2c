//! Minute-tick loading from delimited text files.
//!
//! Expected layout, one row per minute observation:
//!
//! ```text
//! 20170102 020000;1.04653;1.04673;1.04633;1.04654;0
//! ```
//!
//! Columns are timestamp, open, high, low, close, volume; timestamps are
//! `YYYYMMDD HHMMSS`. High, low, and volume are validated as numbers and
//! then dropped, since daily aggregation only needs open and close. Rows
//! are returned in file order; the aggregator does not rely on it.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use thiserror::Error;

use fxlab_core::domain::Tick;

/// Timestamp layout used by minute-history exports.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d %H%M%S";

/// Errors from the tick loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 6 columns (timestamp;open;high;low;close;volume), got {got}")]
    ColumnCount { line: u64, got: usize },

    #[error("line {line}: bad timestamp '{value}' (expected YYYYMMDD HHMMSS)")]
    BadTimestamp { line: u64, value: String },

    #[error("line {line}: bad {column} value '{value}'")]
    BadNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("no ticks in {path}")]
    Empty { path: PathBuf },
}

/// Load minute ticks from a delimited file.
///
/// `delimiter` is the field separator byte (semicolon for minute-history
/// exports, comma for generic CSV); `has_headers` skips the first row.
pub fn load_ticks(path: &Path, delimiter: u8, has_headers: bool) -> Result<Vec<Tick>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut ticks = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != 6 {
            return Err(LoadError::ColumnCount {
                line,
                got: record.len(),
            });
        }

        let timestamp = NaiveDateTime::parse_from_str(&record[0], TIMESTAMP_FORMAT)
            .map_err(|_| LoadError::BadTimestamp {
                line,
                value: record[0].to_string(),
            })?;

        let open = parse_price(&record, 1, "open", line)?;
        // high, low, volume are checked and discarded
        parse_price(&record, 2, "high", line)?;
        parse_price(&record, 3, "low", line)?;
        let close = parse_price(&record, 4, "close", line)?;
        record[5]
            .parse::<f64>()
            .map_err(|_| LoadError::BadNumber {
                line,
                column: "volume",
                value: record[5].to_string(),
            })?;

        ticks.push(Tick {
            timestamp,
            open,
            close,
        });
    }

    if ticks.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(ticks)
}

fn parse_price(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    line: u64,
) -> Result<f64, LoadError> {
    record[index].parse::<f64>().map_err(|_| LoadError::BadNumber {
        line,
        column,
        value: record[index].to_string(),
    })
}

/// Compute a deterministic BLAKE3 hash over a tick sequence.
///
/// Covers timestamps and both prices in input order, so any change to
/// the dataset changes the hash. Recorded in run summaries to pin which
/// data a result came from.
pub fn dataset_hash(ticks: &[Tick]) -> String {
    let mut hasher = blake3::Hasher::new();
    for tick in ticks {
        hasher.update(tick.timestamp.to_string().as_bytes());
        hasher.update(&tick.open.to_le_bytes());
        hasher.update(&tick.close.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_semicolon_minute_rows() {
        let file = write_file(
            "20170102 020000;1.04653;1.04673;1.04633;1.04654;0\n\
             20170102 020100;1.04654;1.04660;1.04650;1.04658;0\n",
        );
        let ticks = load_ticks(file.path(), b';', false).unwrap();
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].open, 1.04653);
        assert_eq!(ticks[0].close, 1.04654);
        assert_eq!(
            ticks[1].timestamp,
            chrono::NaiveDate::from_ymd_opt(2017, 1, 2)
                .unwrap()
                .and_hms_opt(2, 1, 0)
                .unwrap()
        );
    }

    #[test]
    fn loads_comma_rows_with_header() {
        let file = write_file(
            "timestamp,open,high,low,close,volume\n\
             20170103 090000,1.0401,1.0410,1.0399,1.0405,12\n",
        );
        let ticks = load_ticks(file.path(), b',', true).unwrap();
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].close, 1.0405);
    }

    #[test]
    fn rejects_bad_timestamp_with_line_number() {
        let file = write_file(
            "20170102 020000;1.04653;1.04673;1.04633;1.04654;0\n\
             2017-01-02 02:01:00;1.0;1.0;1.0;1.0;0\n",
        );
        let err = load_ticks(file.path(), b';', false).unwrap_err();
        match err {
            LoadError::BadTimestamp { line, value } => {
                assert_eq!(line, 2);
                assert!(value.starts_with("2017-01-02"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_column_count() {
        let file = write_file("20170102 020000;1.04653;1.04673\n");
        let err = load_ticks(file.path(), b';', false).unwrap_err();
        assert!(matches!(err, LoadError::ColumnCount { got: 3, .. }));
    }

    #[test]
    fn rejects_unparseable_price() {
        let file = write_file("20170102 020000;abc;1.0;1.0;1.0;0\n");
        let err = load_ticks(file.path(), b';', false).unwrap_err();
        match err {
            LoadError::BadNumber { column, .. } => assert_eq!(column, "open"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = write_file("");
        let err = load_ticks(file.path(), b';', false).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_ticks(Path::new("/nonexistent/ticks.csv"), b';', false).unwrap_err();
        match err {
            LoadError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/ticks.csv"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn dataset_hash_is_deterministic_and_content_sensitive() {
        let file = write_file("20170102 020000;1.04653;1.04673;1.04633;1.04654;0\n");
        let ticks = load_ticks(file.path(), b';', false).unwrap();

        assert_eq!(dataset_hash(&ticks), dataset_hash(&ticks));

        let mut changed = ticks.clone();
        changed[0].close += 0.0001;
        assert_ne!(dataset_hash(&ticks), dataset_hash(&changed));
    }
}
