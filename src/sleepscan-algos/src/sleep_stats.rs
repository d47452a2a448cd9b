use sleepscan_types::{SleepPeriod, SleepStats};

use crate::{
    AnalysisError,
    helpers::time_math::{mean, mean_deltas, median_deltas, mode_smallest, sample_std_dev_delta},
};

pub struct SleepStatistics;

impl SleepStatistics {
    pub fn summarize(periods: &[SleepPeriod]) -> Result<SleepStats, AnalysisError> {
        if periods.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let durations = periods.iter().map(|p| p.duration).collect::<Vec<_>>();
        let (start_hours, end_hours): (Vec<u32>, Vec<u32>) = periods
            .iter()
            .map(|p| (p.start_hour(), p.end_hour()))
            .unzip();

        let average_duration = mean_deltas(&durations);

        Ok(SleepStats {
            average_duration,
            median_duration: median_deltas(&durations),
            std_duration: sample_std_dev_delta(&durations, average_duration),
            average_start_hour: Self::mean_hour(&start_hours),
            average_end_hour: Self::mean_hour(&end_hours),
            most_common_start_hour: mode_smallest(&start_hours).ok_or(AnalysisError::EmptyInput)?,
            most_common_end_hour: mode_smallest(&end_hours).ok_or(AnalysisError::EmptyInput)?,
            count: periods.len(),
        })
    }

    fn mean_hour(hours: &[u32]) -> f64 {
        let hours = hours.iter().map(|h| f64::from(*h)).collect::<Vec<_>>();
        mean(&hours)
    }
}
