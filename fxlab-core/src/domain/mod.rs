//! Domain types for FXLab

pub mod daily;
pub mod tick;

pub use daily::DailyRecord;
pub use tick::Tick;

/// Currency pair type alias (e.g. "EURUSD")
pub type Pair = String;
