#[macro_use]
extern crate log;

mod scan;
pub use scan::{DEFAULT_RECENT, SleepScan};

pub mod report;
