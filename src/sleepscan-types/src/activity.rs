use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

pub type HourlyCounts = BTreeMap<u32, usize>;
pub type DateCounts = BTreeMap<NaiveDate, usize>;
pub type CategoryHourlyCounts = BTreeMap<(u32, DayCategory), usize>;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum DayCategory {
    Weekday,
    Weekend,
}

impl DayCategory {
    /// Saturday and Sunday (5 and 6 counting from Monday = 0) are the weekend.
    pub fn from_weekday(weekday: Weekday) -> Self {
        if weekday.num_days_from_monday() >= 5 {
            Self::Weekend
        } else {
            Self::Weekday
        }
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        Self::from_weekday(date.weekday())
    }
}
