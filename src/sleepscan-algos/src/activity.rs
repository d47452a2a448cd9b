use chrono::{NaiveDate, NaiveDateTime, Timelike as _};
use sleepscan_types::{CategoryHourlyCounts, DateCounts, DayCategory, HourlyCounts};

use crate::AnalysisError;

/// Hours of the day during which activity counts as a sleep disruption.
///
/// `start_hour` is inclusive, `end_hour` exclusive. A window whose start is
/// after its end wraps past midnight; equal bounds select no hours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisruptionWindow {
    start_hour: u32,
    end_hour: u32,
}

impl Default for DisruptionWindow {
    /// Midnight to 10 AM.
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 10,
        }
    }
}

impl DisruptionWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, AnalysisError> {
        for hour in [start_hour, end_hour] {
            if hour > 23 {
                return Err(AnalysisError::InvalidHour(hour));
            }
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

pub struct ActivityAggregator;

impl ActivityAggregator {
    pub fn hourly_counts(events: &[NaiveDateTime]) -> HourlyCounts {
        let mut counts = HourlyCounts::new();
        for event in events {
            *counts.entry(event.hour()).or_default() += 1;
        }
        counts
    }

    pub fn by_date_counts(events: &[NaiveDateTime]) -> DateCounts {
        let mut counts = DateCounts::new();
        for event in events {
            *counts.entry(event.date()).or_default() += 1;
        }
        counts
    }

    pub fn by_weekday_category_hourly(events: &[NaiveDateTime]) -> CategoryHourlyCounts {
        let mut counts = CategoryHourlyCounts::new();
        for event in events {
            *counts
                .entry((event.hour(), DayCategory::of(event)))
                .or_default() += 1;
        }
        counts
    }

    /// One flag per event, in input order.
    pub fn disruption_flags(events: &[NaiveDateTime], window: &DisruptionWindow) -> Vec<bool> {
        events.iter().map(|e| window.contains(e.hour())).collect()
    }

    /// Number of flagged events per date. Dates without a disruption are left out.
    pub fn disruptions_per_date(
        flags: &[bool],
        dates: &[NaiveDate],
    ) -> Result<DateCounts, AnalysisError> {
        if flags.len() != dates.len() {
            return Err(AnalysisError::LengthMismatch {
                flags: flags.len(),
                dates: dates.len(),
            });
        }

        let mut counts = DateCounts::new();
        for (_, date) in flags.iter().zip(dates).filter(|(flag, _)| **flag) {
            *counts.entry(*date).or_default() += 1;
        }
        Ok(counts)
    }
}
