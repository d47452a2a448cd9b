#[macro_use]
extern crate serde;

pub mod activity;
pub mod events;
pub mod sleep;

mod serde_helpers;

pub use activity::{CategoryHourlyCounts, DateCounts, DayCategory, HourlyCounts};
pub use events::EventLog;
pub use sleep::{SleepPeriod, SleepStats};
