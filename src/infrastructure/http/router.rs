use crate::infrastructure::http::controllers::holidays;
use crate::infrastructure::http::middleware::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/holidays/local", get(holidays::list_local_holidays))
        .route(
            "/api/holidays/external",
            get(holidays::list_external_holidays),
        )
        .route(
            "/api/holidays/:country/:year",
            get(holidays::list_merged_holidays),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
