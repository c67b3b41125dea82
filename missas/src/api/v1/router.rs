use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/masses:window", post(handlers::masses::search_window))
        .route("/masses:upcoming", get(handlers::masses::upcoming))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
}
