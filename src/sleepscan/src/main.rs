#[macro_use]
extern crate log;

use std::{fmt::Display, io::ErrorKind, path::PathBuf};

use anyhow::Context as _;
use chrono::TimeDelta;
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use serde::Serialize;
use sleepscan::{DEFAULT_RECENT, SleepScan};
use sleepscan_algos::{DisruptionWindow, GapDetector};
use sleepscan_codec::load_events_csv;

#[derive(Parser)]
#[command(about = "Infer sleep windows and usage patterns from a timestamped activity log")]
pub struct SleepScanCli {
    /// CSV file with a `timestamp` column
    #[arg(env, long)]
    pub csv_path: PathBuf,
    /// Inactivity longer than this many minutes counts as sleep
    #[arg(env, long, default_value_t = 300)]
    pub gap_minutes: i64,
    /// First hour of the disruption window
    #[arg(env, long, default_value_t = 0)]
    pub disruption_start: u32,
    /// Hour the disruption window ends (exclusive)
    #[arg(env, long, default_value_t = 10)]
    pub disruption_end: u32,
    /// Number of most recent sleep periods to list
    #[arg(long, default_value_t = DEFAULT_RECENT)]
    pub recent: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: Option<SleepScanCommand>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum SleepScanCommand {
    ///
    /// Number of events for each hour of the day
    ///
    HourlyUsage,
    ///
    /// Hourly events split into weekdays and weekends
    ///
    WeekdayUsage,
    ///
    /// Detect sleep periods and print their statistics
    ///
    SleepStats,
    ///
    /// Count events inside the disruption window per date
    ///
    Disruptions,
    ///
    /// Run every analysis (default)
    ///
    Report,
}

impl SleepScanCli {
    pub fn scan(&self) -> anyhow::Result<SleepScan> {
        let gap = TimeDelta::try_minutes(self.gap_minutes)
            .with_context(|| format!("gap of {} minutes is out of range", self.gap_minutes))?;
        let detector = GapDetector::new(gap)?;
        let window = DisruptionWindow::new(self.disruption_start, self.disruption_end)?;
        Ok(SleepScan::new(detector, window, self.recent))
    }

    pub fn selected_command(&self) -> SleepScanCommand {
        self.subcommand.unwrap_or(SleepScanCommand::Report)
    }
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Some(error) = dotenv_problem(dotenv_result) {
        warn!("failed to load .env: {}", error);
    }

    let cli = SleepScanCli::parse();
    let scan = cli.scan()?;

    let events = load_events_csv(&cli.csv_path)
        .with_context(|| format!("loading events from {}", cli.csv_path.display()))?;
    info!("loaded {} events from {}", events.len(), cli.csv_path.display());
    if events.is_empty() {
        warn!("event log is empty");
    }

    let output = match cli.selected_command() {
        SleepScanCommand::HourlyUsage => render(&scan.hourly_usage(&events), cli.format)?,
        SleepScanCommand::WeekdayUsage => render(&scan.weekday_usage(&events), cli.format)?,
        SleepScanCommand::SleepStats => render(&scan.sleep_analysis(&events)?, cli.format)?,
        SleepScanCommand::Disruptions => render(&scan.disruptions(&events)?, cli.format)?,
        SleepScanCommand::Report => render(&scan.report(&events)?, cli.format)?,
    };
    println!("{}", output);

    Ok(())
}

/// A missing `.env` is the normal case and not worth reporting.
fn dotenv_problem(result: Result<PathBuf, dotenv::Error>) -> Option<dotenv::Error> {
    match result {
        Ok(_) => None,
        Err(dotenv::Error::Io(error)) if error.kind() == ErrorKind::NotFound => None,
        Err(error) => Some(error),
    }
}

/// Stdout carries nothing but this, so JSON output stays a single document.
fn render<T: Display + Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    })
}
