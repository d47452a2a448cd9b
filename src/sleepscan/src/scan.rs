use chrono::NaiveDate;
use sleepscan_algos::{ActivityAggregator, AnalysisError, DisruptionWindow, GapDetector, SleepStatistics};
use sleepscan_types::EventLog;

use crate::report::{DisruptionReport, HourlyUsage, Report, SleepAnalysis, WeekdayUsage};

pub const DEFAULT_RECENT: usize = 5;

/// Runs the analyses over one event log.
#[derive(Clone, Copy, Debug)]
pub struct SleepScan {
    pub detector: GapDetector,
    pub window: DisruptionWindow,
    /// How many of the latest sleep periods to list.
    pub recent: usize,
}

impl Default for SleepScan {
    fn default() -> Self {
        Self {
            detector: GapDetector::default(),
            window: DisruptionWindow::default(),
            recent: DEFAULT_RECENT,
        }
    }
}

impl SleepScan {
    pub fn new(detector: GapDetector, window: DisruptionWindow, recent: usize) -> Self {
        debug!(
            "sleep gap threshold: {}m, disruption window: {}..{}",
            detector.threshold().num_minutes(),
            window.start_hour(),
            window.end_hour()
        );

        Self {
            detector,
            window,
            recent,
        }
    }

    pub fn hourly_usage(&self, events: &EventLog) -> HourlyUsage {
        HourlyUsage::new(ActivityAggregator::hourly_counts(events.as_slice()))
    }

    pub fn weekday_usage(&self, events: &EventLog) -> WeekdayUsage {
        WeekdayUsage::new(&ActivityAggregator::by_weekday_category_hourly(
            events.as_slice(),
        ))
    }

    pub fn sleep_analysis(&self, events: &EventLog) -> anyhow::Result<SleepAnalysis> {
        let periods = self.detector.detect_log(events);

        let stats = match SleepStatistics::summarize(&periods) {
            Ok(stats) => Some(stats),
            Err(AnalysisError::EmptyInput) => {
                warn!(
                    "no gaps longer than {}m in {} events",
                    self.detector.threshold().num_minutes(),
                    events.len()
                );
                None
            }
            Err(error) => return Err(error.into()),
        };

        let skip = periods.len().saturating_sub(self.recent);
        let recent = periods.into_iter().skip(skip).collect();

        Ok(SleepAnalysis { stats, recent })
    }

    pub fn disruptions(&self, events: &EventLog) -> anyhow::Result<DisruptionReport> {
        let events = events.as_slice();
        let flags = ActivityAggregator::disruption_flags(events, &self.window);
        let dates = events.iter().map(|e| e.date()).collect::<Vec<NaiveDate>>();
        let per_date = ActivityAggregator::disruptions_per_date(&flags, &dates)?;

        Ok(DisruptionReport::new(self.window, per_date))
    }

    pub fn report(&self, events: &EventLog) -> anyhow::Result<Report> {
        Ok(Report {
            events: events.len(),
            first_event: events.first(),
            last_event: events.last(),
            hourly: self.hourly_usage(events),
            weekday: self.weekday_usage(events),
            sleep: self.sleep_analysis(events)?,
            disruptions: self.disruptions(events)?,
        })
    }
}
