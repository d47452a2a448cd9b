use chrono::{Duration, NaiveDateTime, TimeDelta};
use sleepscan_types::{EventLog, SleepPeriod};

use crate::AnalysisError;

/// Gaps in activity longer than this are counted as sleep.
pub const DEFAULT_SLEEP_GAP: Duration = Duration::hours(5);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapDetector {
    threshold: TimeDelta,
}

impl Default for GapDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SLEEP_GAP,
        }
    }
}

impl GapDetector {
    pub fn new(threshold: TimeDelta) -> Result<Self, AnalysisError> {
        if threshold <= TimeDelta::zero() {
            return Err(AnalysisError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> TimeDelta {
        self.threshold
    }

    /// Emits one period for every pair of consecutive events further apart
    /// than the threshold. A gap of exactly the threshold is not sleep.
    ///
    /// `events` must be sorted ascending; this is not re-checked in release
    /// builds. [`EventLog`] guarantees the ordering, see [`Self::detect_log`].
    pub fn detect(&self, events: &[NaiveDateTime]) -> Vec<SleepPeriod> {
        debug_assert!(events.is_sorted(), "events must be sorted ascending");

        events
            .windows(2)
            .filter(|w| w[1] - w[0] > self.threshold)
            .map(|w| SleepPeriod::new(w[0], w[1]))
            .collect()
    }

    pub fn detect_log(&self, events: &EventLog) -> Vec<SleepPeriod> {
        self.detect(events.as_slice())
    }
}
