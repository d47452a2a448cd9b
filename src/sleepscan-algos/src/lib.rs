pub(crate) mod error;
pub use error::AnalysisError;

pub(crate) mod gap;
pub use gap::{DEFAULT_SLEEP_GAP, GapDetector};

pub(crate) mod sleep_stats;
pub use sleep_stats::SleepStatistics;

pub(crate) mod activity;
pub use activity::{ActivityAggregator, DisruptionWindow};

pub mod helpers;
