use async_trait::async_trait;
use chrono::NaiveDate;
use hijri_holidays::domain::entities::{CalendarDate, ExternalHoliday};
use hijri_holidays::domain::errors::{ConversionError, HolidayError, HolidayResult};
use hijri_holidays::domain::ports::{Clock, HijriConverter, HolidayProvider};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// What the fake provider answers with on every call
#[derive(Clone)]
pub enum ProviderReply {
    Holidays(Vec<ExternalHoliday>),
    Status(u16),
    Transport(String),
}

pub struct FakeHolidayProvider {
    reply: ProviderReply,
    calls: Mutex<Vec<(String, i32)>>,
}

impl FakeHolidayProvider {
    pub fn new(reply: ProviderReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(holidays: Vec<ExternalHoliday>) -> Self {
        Self::new(ProviderReply::Holidays(holidays))
    }

    pub fn calls(&self) -> Vec<(String, i32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HolidayProvider for FakeHolidayProvider {
    async fn fetch(&self, country: &str, year: i32) -> HolidayResult<Vec<ExternalHoliday>> {
        self.calls.lock().unwrap().push((country.to_string(), year));
        match &self.reply {
            ProviderReply::Holidays(holidays) => Ok(holidays.clone()),
            ProviderReply::Status(status) => Err(HolidayError::UpstreamStatus(*status)),
            ProviderReply::Transport(msg) => Err(HolidayError::Transport(msg.clone())),
        }
    }
}

/// Converter answering from a fixed Gregorian to Hijri table.
/// Dates missing from the table fail like an upstream 404.
pub struct TableConverter {
    table: HashMap<NaiveDate, CalendarDate>,
    calls: AtomicUsize,
}

impl TableConverter {
    /// Entries are (yyyy-MM-dd, dd-MM-yyyy Hijri)
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let table = entries
            .iter()
            .map(|(gregorian, hijri)| {
                (
                    NaiveDate::parse_from_str(gregorian, "%Y-%m-%d").unwrap(),
                    CalendarDate::parse_dmy(hijri).unwrap(),
                )
            })
            .collect();
        Self {
            table,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HijriConverter for TableConverter {
    async fn convert(&self, date: NaiveDate) -> Result<CalendarDate, ConversionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table
            .get(&date)
            .copied()
            .ok_or_else(|| ConversionError::Status {
                date: date.format("%d-%m-%Y").to_string(),
                status: 404,
            })
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
