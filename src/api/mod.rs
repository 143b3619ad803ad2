//! HTTP API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::Error;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::list_days).post(handlers::create_day))
        .route("/:id", get(handlers::get_day))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Uniform JSON error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error-to-response mapping at the router boundary: every handler error
/// becomes a status code plus the `{"error": ...}` envelope.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::DayNotFound => StatusCode::NOT_FOUND,
            Error::MissingName => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
