use chrono::{NaiveDateTime, TimeDelta, Timelike as _};

use crate::serde_helpers::{delta_seconds, opt_delta_seconds};

/// A gap in activity long enough to be read as sleep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SleepPeriod {
    /// Last event before the gap.
    pub start: NaiveDateTime,
    /// First event after the gap.
    pub end: NaiveDateTime,
    #[serde(serialize_with = "delta_seconds")]
    pub duration: TimeDelta,
}

impl SleepPeriod {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            duration: end - start,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    pub fn end_hour(&self) -> u32 {
        self.end.hour()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SleepStats {
    #[serde(serialize_with = "delta_seconds")]
    pub average_duration: TimeDelta,
    #[serde(serialize_with = "delta_seconds")]
    pub median_duration: TimeDelta,
    /// Sample standard deviation (ddof = 1), absent for a single period.
    #[serde(serialize_with = "opt_delta_seconds")]
    pub std_duration: Option<TimeDelta>,
    pub average_start_hour: f64,
    pub average_end_hour: f64,
    pub most_common_start_hour: u32,
    pub most_common_end_hour: u32,
    pub count: usize,
}
