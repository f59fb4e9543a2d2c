//! Deterministic synthetic minute ticks for offline demos and tests.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fxlab_core::domain::Tick;

/// Generate synthetic minute ticks for `days` trading days starting at
/// the first weekday on or after `start`, `ticks_per_day` per day.
/// Weekends are skipped.
///
/// Prices follow a small random walk from 1.05 with per-minute noise,
/// seeded from the pair name, so the same pair always produces the same
/// data. These are clearly fake and runs on them are tagged as synthetic.
pub fn generate_synthetic_ticks(
    pair: &str,
    start: NaiveDate,
    days: usize,
    ticks_per_day: usize,
) -> Vec<Tick> {
    // Deterministic seed from the pair name
    let seed: [u8; 32] = *blake3::hash(pair.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let per_day = ticks_per_day.clamp(1, 1440);
    let mut ticks = Vec::with_capacity(days * per_day);
    let mut price = 1.05_f64;
    let mut current = start;

    for _ in 0..days {
        // Skip weekends (simple heuristic)
        while matches!(
            current.weekday(),
            chrono::Weekday::Sat | chrono::Weekday::Sun
        ) {
            current += chrono::Duration::days(1);
        }

        let step = 1440 / per_day;
        for m in 0..per_day {
            let minute_of_day = (m * step) as u32;
            let drift: f64 = rng.gen_range(-0.0004..0.0004);
            let open = price;
            let close = price * (1.0 + drift);
            ticks.push(Tick {
                timestamp: current
                    .and_hms_opt(minute_of_day / 60, minute_of_day % 60, 0)
                    .unwrap(),
                open,
                close,
            });
            price = close;
        }

        current += chrono::Duration::days(1);
    }

    ticks
}
