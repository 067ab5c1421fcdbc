use crate::domain::entities::CalendarDate;
use crate::domain::errors::ConversionError;
use crate::domain::ports::HijriConverter;
use crate::infrastructure::observability::record_upstream_request;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

const PROVIDER: &str = "aladhan";

/// Response of `GET /v1/gToH/{dd-MM-yyyy}`, reduced to the field we read
#[derive(Debug, Deserialize)]
struct GregorianToHijriResponse {
    data: ConversionData,
}

#[derive(Debug, Deserialize)]
struct ConversionData {
    hijri: HijriPart,
}

#[derive(Debug, Deserialize)]
struct HijriPart {
    date: String, // dd-MM-yyyy
}

/// Hijri converter backed by the Aladhan calendar API
pub struct AladhanHijriConverter {
    http_client: Client,
    base_url: String,
}

impl AladhanHijriConverter {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    fn conversion_url(&self, gregorian: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), gregorian)
    }
}

#[async_trait]
impl HijriConverter for AladhanHijriConverter {
    async fn convert(&self, date: NaiveDate) -> Result<CalendarDate, ConversionError> {
        let gregorian = date.format("%d-%m-%Y").to_string();
        let url = self.conversion_url(&gregorian);
        debug!("Converting {} to Hijri", gregorian);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            warn!("Hijri conversion request for {} failed: {}", gregorian, e);
            record_upstream_request(PROVIDER, "transport_error");
            ConversionError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Hijri conversion for {} returned status {}",
                gregorian,
                status.as_u16()
            );
            record_upstream_request(PROVIDER, "status_error");
            return Err(ConversionError::Status {
                date: gregorian,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            record_upstream_request(PROVIDER, "transport_error");
            ConversionError::Transport(e.to_string())
        })?;

        let parsed = decode_hijri_date(&body).map_err(|e| {
            record_upstream_request(PROVIDER, "decode_error");
            e
        })?;

        record_upstream_request(PROVIDER, "success");
        Ok(parsed)
    }
}

fn decode_hijri_date(body: &[u8]) -> Result<CalendarDate, ConversionError> {
    let response: GregorianToHijriResponse =
        serde_json::from_slice(body).map_err(|e| ConversionError::Decode(e.to_string()))?;
    Ok(CalendarDate::parse_dmy(&response.data.hijri.date)?)
}
