use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::Serialize;
use sleepscan_algos::{
    DisruptionWindow,
    helpers::format_hm::{FormatHM, format_hour},
};
use sleepscan_types::{CategoryHourlyCounts, DateCounts, DayCategory, HourlyCounts, SleepPeriod, SleepStats};
use strum::IntoEnumIterator as _;

const BAR_WIDTH: usize = 40;
const SEPARATOR: &str = "----------------------------------------";

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(max))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyUsage {
    pub counts: HourlyCounts,
}

impl HourlyUsage {
    pub fn new(counts: HourlyCounts) -> Self {
        Self { counts }
    }

    pub fn count(&self, hour: u32) -> usize {
        self.counts.get(&hour).copied().unwrap_or_default()
    }
}

impl Display for HourlyUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hourly Usage:")?;
        writeln!(f, "{SEPARATOR}")?;
        let max = self.counts.values().copied().max().unwrap_or_default();
        for hour in 0..24 {
            let count = self.count(hour);
            writeln!(f, "{:02}  {:>6}  {}", hour, count, bar(count, max))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryRow {
    pub hour: u32,
    pub weekday: usize,
    pub weekend: usize,
}

impl CategoryRow {
    pub fn count(&self, category: DayCategory) -> usize {
        match category {
            DayCategory::Weekday => self.weekday,
            DayCategory::Weekend => self.weekend,
        }
    }
}

/// Hour by day category table, one row per hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayUsage {
    pub rows: Vec<CategoryRow>,
}

impl WeekdayUsage {
    pub fn new(counts: &CategoryHourlyCounts) -> Self {
        let get = |hour, category| counts.get(&(hour, category)).copied().unwrap_or_default();
        let rows = (0..24)
            .map(|hour| CategoryRow {
                hour,
                weekday: get(hour, DayCategory::Weekday),
                weekend: get(hour, DayCategory::Weekend),
            })
            .collect();

        Self { rows }
    }
}

impl Display for WeekdayUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hourly Usage: Weekdays vs. Weekends")?;
        writeln!(f, "{SEPARATOR}")?;
        write!(f, "Hour")?;
        for category in DayCategory::iter() {
            write!(f, "  {:>8}", category.to_string())?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{:02}  ", row.hour)?;
            for category in DayCategory::iter() {
                write!(f, "  {:>8}", row.count(category))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepAnalysis {
    /// `None` when no gap was long enough to count as sleep.
    pub stats: Option<SleepStats>,
    pub recent: Vec<SleepPeriod>,
}

impl Display for SleepAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sleep Pattern Analysis Results:")?;
        writeln!(f, "{SEPARATOR}")?;

        let Some(stats) = self.stats else {
            return writeln!(f, "No sleep periods detected");
        };

        writeln!(f, "Total number of detected sleep periods: {}", stats.count)?;
        writeln!(f)?;
        writeln!(f, "Average sleep duration: {}", stats.average_duration.format_hm())?;
        writeln!(f, "Median sleep duration: {}", stats.median_duration.format_hm())?;
        match stats.std_duration {
            Some(std) => writeln!(f, "Standard deviation: {}", std.format_hm())?,
            None => writeln!(f, "Standard deviation: n/a")?,
        }
        writeln!(f)?;
        writeln!(f, "Typical sleep time: {}", format_hour(stats.average_start_hour))?;
        writeln!(f, "Typical wake time: {}", format_hour(stats.average_end_hour))?;
        writeln!(f)?;
        writeln!(f, "Most common sleep time: {}:00", stats.most_common_start_hour)?;
        writeln!(f, "Most common wake time: {}:00", stats.most_common_end_hour)?;

        if !self.recent.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recent sleep periods:")?;
        }
        for period in &self.recent {
            writeln!(f)?;
            writeln!(f, "From: {}", period.start.format("%Y-%m-%d %H:%M"))?;
            writeln!(f, "To: {}", period.end.format("%Y-%m-%d %H:%M"))?;
            writeln!(f, "Duration: {}", period.duration.format_hm())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisruptionReport {
    pub window_start: u32,
    pub window_end: u32,
    pub per_date: DateCounts,
    pub total: usize,
}

impl DisruptionReport {
    pub fn new(window: DisruptionWindow, per_date: DateCounts) -> Self {
        Self {
            window_start: window.start_hour(),
            window_end: window.end_hour(),
            total: per_date.values().sum(),
            per_date,
        }
    }
}

impl Display for DisruptionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Sleep Disruptions ({}:00 - {}:00):",
            self.window_start, self.window_end
        )?;
        writeln!(f, "{SEPARATOR}")?;
        let max = self.per_date.values().copied().max().unwrap_or_default();
        for (date, count) in &self.per_date {
            writeln!(f, "{}  {:>6}  {}", date, count, bar(*count, max))?;
        }
        writeln!(f, "Total disruptions: {} over {} days", self.total, self.per_date.len())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub events: usize,
    pub first_event: Option<NaiveDateTime>,
    pub last_event: Option<NaiveDateTime>,
    pub hourly: HourlyUsage,
    pub weekday: WeekdayUsage,
    pub sleep: SleepAnalysis,
    pub disruptions: DisruptionReport,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Events: {}", self.events)?;
        if let (Some(first), Some(last)) = (self.first_event, self.last_event) {
            write!(
                f,
                " ({} to {})",
                first.format("%Y-%m-%d %H:%M"),
                last.format("%Y-%m-%d %H:%M")
            )?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{}", self.hourly)?;
        writeln!(f, "{}", self.weekday)?;
        writeln!(f, "{}", self.sleep)?;
        write!(f, "{}", self.disruptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn stats() -> SleepStats {
        SleepStats {
            average_duration: TimeDelta::minutes(7 * 60 + 55),
            median_duration: TimeDelta::minutes(7 * 60 + 30),
            std_duration: Some(TimeDelta::minutes(42)),
            average_start_hour: 23.6,
            average_end_hour: 7.2,
            most_common_start_hour: 23,
            most_common_end_hour: 7,
            count: 2,
        }
    }

    #[test]
    fn bar_scales_to_max() {
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(10, 10).len(), BAR_WIDTH);
        assert_eq!(bar(1, 1000).len(), 1);
        assert_eq!(bar(3, 0), "");
    }

    #[test]
    fn hourly_usage_fills_every_hour() {
        let usage = HourlyUsage::new(HourlyCounts::from([(14, 3)]));
        let text = usage.to_string();

        assert_eq!(usage.count(14), 3);
        assert_eq!(usage.count(2), 0);
        // title, separator and 24 rows
        assert_eq!(text.lines().count(), 26);
        assert!(text.contains("14       3  "));
    }

    #[test]
    fn weekday_usage_unstacks_categories() {
        let counts = CategoryHourlyCounts::from([
            ((22, DayCategory::Weekday), 4),
            ((22, DayCategory::Weekend), 1),
            ((9, DayCategory::Weekend), 2),
        ]);
        let usage = WeekdayUsage::new(&counts);

        assert_eq!(usage.rows.len(), 24);
        assert_eq!(
            usage.rows[22],
            CategoryRow {
                hour: 22,
                weekday: 4,
                weekend: 1
            }
        );
        assert_eq!(usage.rows[9].count(DayCategory::Weekday), 0);
        assert_eq!(usage.rows[9].count(DayCategory::Weekend), 2);
        assert!(usage.to_string().contains("Weekday   Weekend"));
    }

    #[test]
    fn sleep_analysis_text() {
        let analysis = SleepAnalysis {
            stats: Some(stats()),
            recent: vec![SleepPeriod::new(at(1, 23, 5), at(2, 7, 0))],
        };
        let text = analysis.to_string();

        assert!(text.contains("Total number of detected sleep periods: 2"));
        assert!(text.contains("Average sleep duration: 7h 55m"));
        assert!(text.contains("Median sleep duration: 7h 30m"));
        assert!(text.contains("Standard deviation: 0h 42m"));
        assert!(text.contains("Typical sleep time: 23:00"));
        assert!(text.contains("Typical wake time: 7:00"));
        assert!(text.contains("Most common wake time: 7:00"));
        assert!(text.contains("From: 2025-01-01 23:05"));
        assert!(text.contains("To: 2025-01-02 07:00"));
        assert!(text.contains("Duration: 7h 55m"));
    }

    #[test]
    fn sleep_analysis_without_periods() {
        let analysis = SleepAnalysis {
            stats: None,
            recent: Vec::new(),
        };
        assert!(analysis.to_string().contains("No sleep periods detected"));
    }

    #[test]
    fn disruption_totals() {
        let per_date = DateCounts::from([
            (NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 3),
            (NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), 1),
        ]);
        let report = DisruptionReport::new(DisruptionWindow::default(), per_date);

        assert_eq!(report.total, 4);
        assert!(report.to_string().contains("Total disruptions: 4 over 2 days"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = Report {
            events: 2,
            first_event: Some(at(1, 23, 5)),
            last_event: Some(at(2, 7, 0)),
            hourly: HourlyUsage::new(HourlyCounts::from([(23, 1), (7, 1)])),
            weekday: WeekdayUsage::new(&CategoryHourlyCounts::new()),
            sleep: SleepAnalysis {
                stats: Some(stats()),
                recent: vec![SleepPeriod::new(at(1, 23, 5), at(2, 7, 0))],
            },
            disruptions: DisruptionReport::new(
                DisruptionWindow::default(),
                DateCounts::from([(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), 1)]),
            ),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["events"], 2);
        assert_eq!(json["hourly"]["counts"]["23"], 1);
        assert_eq!(json["sleep"]["stats"]["average_duration"], 28500);
        assert_eq!(json["sleep"]["recent"][0]["duration"], 28500);
        assert_eq!(json["disruptions"]["per_date"]["2025-01-02"], 1);
        assert_eq!(json["weekday"]["rows"].as_array().unwrap().len(), 24);
    }
}
