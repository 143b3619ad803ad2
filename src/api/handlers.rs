//! API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::Day;
use crate::Error;

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// List all days in insertion order
pub async fn list_days(State(state): State<AppState>) -> Json<Vec<Day>> {
    Json(state.store.list().await)
}

/// Fetch a single day by id
pub async fn get_day(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DayEnvelope>, Error> {
    // A non-integer segment behaves like an unknown id, keeping the
    // error envelope uniform instead of leaking the router's default
    // plain-text rejection.
    let id: u64 = id.parse().map_err(|_| Error::DayNotFound)?;

    let day = state.store.get(id).await.ok_or(Error::DayNotFound)?;

    Ok(Json(DayEnvelope { day }))
}

#[derive(Debug, Serialize)]
pub struct DayEnvelope {
    pub day: Day,
}

/// Append a new day
///
/// Any body that fails to deserialize into [`CreateDayRequest`] (empty,
/// not JSON, missing or non-string `name`) is rejected before the store
/// is touched.
pub async fn create_day(
    State(state): State<AppState>,
    payload: Result<Json<CreateDayRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateDayResponse>), Error> {
    let Json(payload) = payload.map_err(|_| Error::MissingName)?;

    let day = state.store.append(payload.name).await;
    tracing::info!(id = day.id, name = %day.name, "Appended day");

    Ok((
        StatusCode::CREATED,
        Json(CreateDayResponse { success: true, day }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct CreateDayRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateDayResponse {
    pub success: bool,
    pub day: Day,
}
