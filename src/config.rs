use std::env;
use std::time::Duration;

pub const DEFAULT_HOLIDAYS_API_URL: &str = "https://api.api-ninjas.com/v1/holidays";
pub const DEFAULT_HIJRI_API_URL: &str = "http://api.aladhan.com/v1/gToH";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub holidays_api_url: String,
    pub holidays_api_key: String,
    pub hijri_api_url: String,
    pub upstream_timeout: Option<Duration>,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: Option<u16>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = var("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let holidays_api_url =
            var("HOLIDAYS_API_URL").unwrap_or_else(|| DEFAULT_HOLIDAYS_API_URL.to_string());

        let holidays_api_key = var("HOLIDAYS_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let hijri_api_url =
            var("HIJRI_API_URL").unwrap_or_else(|| DEFAULT_HIJRI_API_URL.to_string());

        let upstream_timeout = var("UPSTREAM_TIMEOUT_SECS")
            .map(|secs| secs.parse().map_err(|_| ConfigError::InvalidTimeout))
            .transpose()?
            .map(Duration::from_secs);

        let otel_exporter_endpoint = var("OTEL_EXPORTER_OTLP_ENDPOINT");

        let service_name = var("SERVICE_NAME").unwrap_or_else(|| "hijri-holidays".to_string());

        let metrics_port = var("METRICS_PORT").and_then(|port| port.parse().ok());

        Ok(Config {
            server_host,
            server_port,
            holidays_api_url,
            holidays_api_key,
            hijri_api_url,
            upstream_timeout,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOLIDAYS_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")]
    InvalidTimeout,
}
