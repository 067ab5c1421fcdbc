use super::fakes::FixedClock;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use hijri_holidays::application::services::HolidayService;
use hijri_holidays::domain::ports::{HijriConverter, HolidayProvider};
use hijri_holidays::infrastructure::http::middleware::AppState;
use hijri_holidays::infrastructure::http::router::build_router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn build_test_app(
    provider: Arc<dyn HolidayProvider>,
    converter: Arc<dyn HijriConverter>,
    today: NaiveDate,
) -> Router {
    let service = HolidayService::new(provider, converter, Arc::new(FixedClock(today)));
    build_router(AppState::new(service))
}

/// Issue a GET through the router and return the status with the decoded body.
/// Non-JSON bodies come back as a JSON string.
pub async fn send_get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, body)
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port with nothing listening on it
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
