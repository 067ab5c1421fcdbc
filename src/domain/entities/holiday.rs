use super::calendar_date::{weekday_name, CalendarDate};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Holiday record as sent by the holiday provider.
///
/// Only `name`, `date` and `day` are interpreted. Any other provider fields
/// (`country`, `iso`, `type`, ...) are kept so the raw route can echo them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalHoliday {
    pub name: String,
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub day: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExternalHoliday {
    pub fn new(name: impl Into<String>, date: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            day: day.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Holiday returned to API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub name: String,
    pub start_date: CalendarDate,
    pub start_day: String,
    pub day_count: u32,
    pub end_date: CalendarDate,
    pub end_day: String,
    pub remaining_days: i64,
}

impl Holiday {
    /// One-day holiday on a Gregorian date, as served from the local list
    pub fn single_day(name: impl Into<String>, date: NaiveDate, today: NaiveDate) -> Self {
        let day = weekday_name(date.weekday()).to_string();
        Self {
            name: name.into(),
            start_date: date.into(),
            start_day: day.clone(),
            day_count: 1,
            end_date: date.into(),
            end_day: day,
            remaining_days: remaining_days(today, date),
        }
    }
}

/// Whole days from `today` until `date`, never below zero
pub fn remaining_days(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days().max(0)
}
