use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Missas API",
        version = "1.0.0",
        description = "Masses happening soon, from the diocese schedule search.",
    ),
    paths(
        handlers::health::health_check,
        handlers::masses::search_window,
        handlers::masses::upcoming,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Masses
        dto::masses::WindowSearchRequest,
        dto::masses::WindowSearchResponse,
        dto::masses::MassResponse,
        dto::masses::ResultSource,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::RemoteStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "masses", description = "Windowed mass search with forward fallback"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
