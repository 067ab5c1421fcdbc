use crate::application::services::HolidayService;
use crate::config::Config;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::providers::{AladhanHijriConverter, ApiNinjasHolidayProvider};
use crate::infrastructure::runtime::SystemClock;
use reqwest::Client;
use std::sync::Arc;

/// Shared HTTP client for both upstream providers
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.upstream_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

pub fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    let http_client = build_http_client(config)?;

    let provider = Arc::new(ApiNinjasHolidayProvider::new(
        http_client.clone(),
        config.holidays_api_url.clone(),
        config.holidays_api_key.clone(),
    ));
    let converter = Arc::new(AladhanHijriConverter::new(
        http_client,
        config.hijri_api_url.clone(),
    ));
    let clock = Arc::new(SystemClock::new());

    tracing::info!(
        "Upstream providers configured: holidays={} hijri={}",
        config.holidays_api_url,
        config.hijri_api_url
    );

    Ok(AppState::new(HolidayService::new(provider, converter, clock)))
}
