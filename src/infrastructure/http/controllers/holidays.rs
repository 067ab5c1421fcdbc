use crate::{
    domain::entities::{ExternalHoliday, Holiday},
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

/// GET /api/holidays/local - Upcoming holidays from the built-in list
pub async fn list_local_holidays(State(state): State<AppState>) -> Json<Vec<Holiday>> {
    Json(state.holiday_service.upcoming_local())
}

/// GET /api/holidays/external?country=&year= - Provider records as received
pub async fn list_external_holidays(
    State(state): State<AppState>,
    Query(params): Query<ExternalHolidayQuery>,
) -> ApiResult<Json<Vec<ExternalHoliday>>> {
    let holidays = state
        .holiday_service
        .external(&params.country, params.year)
        .await?;

    Ok(Json(holidays))
}

/// GET /api/holidays/:country/:year - Provider records merged with Hijri dates
pub async fn list_merged_holidays(
    State(state): State<AppState>,
    Path((country, year)): Path<(String, i32)>,
) -> ApiResult<Json<Vec<Holiday>>> {
    let holidays = state.holiday_service.merged(&country, year).await?;

    Ok(Json(holidays))
}

/// Missing parameters are forwarded upstream as "" and 0
#[derive(Debug, Deserialize)]
pub struct ExternalHolidayQuery {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub year: i32,
}
