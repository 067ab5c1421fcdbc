use crate::domain::errors::DateParseError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Day, month and year with no calendar system attached.
///
/// Local holidays carry Gregorian values here while merged holidays carry the
/// Hijri values returned by the converter. Only the numeric ranges are checked,
/// so a Hijri `30-02-1446` is accepted even though February never has 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateParseError> {
        if !(1..=12).contains(&month) {
            return Err(DateParseError::new(
                format!("{:04}-{:02}-{:02}", year, month, day),
                "month must be between 1 and 12",
            ));
        }
        if !(1..=31).contains(&day) {
            return Err(DateParseError::new(
                format!("{:04}-{:02}-{:02}", year, month, day),
                "day must be between 1 and 31",
            ));
        }
        Ok(Self { year, month, day })
    }

    /// Parse a `dd-MM-yyyy` string, the layout used by the Hijri converter
    pub fn parse_dmy(input: &str) -> Result<Self, DateParseError> {
        let [day, month, year] = split_date_parts(input, "expected dd-MM-yyyy")?;
        let year = i32::try_from(year)
            .map_err(|_| DateParseError::new(input, "year is out of range"))?;
        Self::new(year, month, day).map_err(|e| DateParseError::new(input, e.reason))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Interpret the values as a Gregorian date, if they form one
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parses the `yyyy-MM-dd` layout produced by `Display`
impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [year, month, day] = split_date_parts(input, "expected yyyy-MM-dd")?;
        let year = i32::try_from(year)
            .map_err(|_| DateParseError::new(input, "year is out of range"))?;
        Self::new(year, month, day).map_err(|e| DateParseError::new(input, e.reason))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn split_date_parts(input: &str, expected: &str) -> Result<[u32; 3], DateParseError> {
    let mut parts = input.trim().split('-');
    let mut values = [0u32; 3];
    for value in values.iter_mut() {
        let part = parts
            .next()
            .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| DateParseError::new(input, expected))?;
        *value = part
            .parse()
            .map_err(|_| DateParseError::new(input, expected))?;
    }
    if parts.next().is_some() {
        return Err(DateParseError::new(input, expected));
    }
    Ok(values)
}

/// Parse the `yyyy-MM-dd` dates sent by the holiday provider
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| DateParseError::new(input, e.to_string()))
}

/// English weekday name, e.g. "Monday"
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
