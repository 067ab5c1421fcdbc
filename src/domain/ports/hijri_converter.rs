use crate::domain::entities::CalendarDate;
use crate::domain::errors::ConversionError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Converts a Gregorian date to its Hijri day, month and year
#[async_trait]
pub trait HijriConverter: Send + Sync {
    async fn convert(&self, date: NaiveDate) -> Result<CalendarDate, ConversionError>;
}
