use chrono::TimeDelta;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("no sleep periods to summarize")]
    EmptyInput,
    #[error("sleep gap threshold must be positive, got {0}")]
    InvalidThreshold(TimeDelta),
    #[error("hour must be in 0..=23, got {0}")]
    InvalidHour(u32),
    #[error("got {flags} disruption flags for {dates} dates")]
    LengthMismatch { flags: usize, dates: usize },
}
