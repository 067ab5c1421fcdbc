use crate::domain::entities::ExternalHoliday;
use crate::domain::errors::{HolidayError, HolidayResult};
use crate::domain::ports::HolidayProvider;
use crate::infrastructure::observability::record_upstream_request;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

const PROVIDER: &str = "api_ninjas";

/// Holiday provider backed by the API Ninjas holidays endpoint
pub struct ApiNinjasHolidayProvider {
    http_client: Client,
    endpoint: String,
    api_key: String,
}

impl ApiNinjasHolidayProvider {
    pub fn new(http_client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl HolidayProvider for ApiNinjasHolidayProvider {
    async fn fetch(&self, country: &str, year: i32) -> HolidayResult<Vec<ExternalHoliday>> {
        let year = year.to_string();
        info!("Fetching holidays for country={} year={}", country, year);

        let response = self
            .http_client
            .get(&self.endpoint)
            .header("X-Api-Key", &self.api_key)
            .query(&[("country", country), ("year", year.as_str())])
            .send()
            .await
            .map_err(|e| {
                // Network error (timeout, connection refused, DNS failure, etc.)
                warn!("Holiday provider request failed: {}", e);
                record_upstream_request(PROVIDER, "transport_error");
                HolidayError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Holiday provider returned status {}", status.as_u16());
            record_upstream_request(PROVIDER, "status_error");
            return Err(HolidayError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            record_upstream_request(PROVIDER, "transport_error");
            HolidayError::Transport(e.to_string())
        })?;

        let holidays: Vec<ExternalHoliday> = serde_json::from_slice(&body).map_err(|e| {
            record_upstream_request(PROVIDER, "decode_error");
            HolidayError::Decode(e.to_string())
        })?;

        record_upstream_request(PROVIDER, "success");
        info!("Holiday provider returned {} records", holidays.len());

        Ok(holidays)
    }
}
