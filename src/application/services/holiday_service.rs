use crate::domain::entities::{ExternalHoliday, Holiday};
use crate::domain::errors::{HolidayError, HolidayResult};
use crate::domain::ports::{Clock, HijriConverter, HolidayProvider};
use crate::domain::services::{local_holidays, merge_holidays};
use std::sync::Arc;

#[derive(Clone)]
pub struct HolidayService {
    provider: Arc<dyn HolidayProvider>,
    converter: Arc<dyn HijriConverter>,
    clock: Arc<dyn Clock>,
}

impl HolidayService {
    pub fn new(
        provider: Arc<dyn HolidayProvider>,
        converter: Arc<dyn HijriConverter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            converter,
            clock,
        }
    }

    /// Built-in holidays from today onwards
    pub fn upcoming_local(&self) -> Vec<Holiday> {
        local_holidays(self.clock.today())
    }

    /// Provider records exactly as received
    pub async fn external(&self, country: &str, year: i32) -> HolidayResult<Vec<ExternalHoliday>> {
        self.provider.fetch(country, year).await
    }

    /// Provider records merged by name and enriched with Hijri dates
    pub async fn merged(&self, country: &str, year: i32) -> HolidayResult<Vec<Holiday>> {
        let records = self.provider.fetch(country, year).await?;

        if records.is_empty() {
            return Err(HolidayError::NotFound {
                country: country.to_string(),
                year,
            });
        }

        tracing::info!(
            "Merging {} holiday records for {} {}",
            records.len(),
            country,
            year
        );

        merge_holidays(&records, self.converter.as_ref(), self.clock.today()).await
    }
}
