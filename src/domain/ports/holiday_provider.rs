use crate::domain::entities::ExternalHoliday;
use crate::domain::errors::HolidayResult;
use async_trait::async_trait;

/// Source of holiday records for a country and year
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Fetch every holiday the provider lists, in provider order.
    /// `country` and `year` are forwarded without validation.
    async fn fetch(&self, country: &str, year: i32) -> HolidayResult<Vec<ExternalHoliday>>;
}
