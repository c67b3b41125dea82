//! v1 Mass search handlers.
//!
//! `POST /api/v1/masses:window` searches an explicit day and start time;
//! `GET /api/v1/masses:upcoming` searches from the diocese's current time.

use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{WindowSearchRequest, WindowSearchResponse};
use crate::api::v1::response::{
    ApiError, ApiResponse, ErrorCode, ResponseMeta, UPCOMING_FAILURE_MESSAGE, WINDOW_FAILURE_MESSAGE,
};
use crate::api::AppState;
use crate::error::Result;
use crate::models::{DayToken, TimePoint, WindowSearch};

/// `POST /api/v1/masses:window`
///
/// Masses within one hour of `horarioInicio`, or the next slot with any
/// masses when that hour is empty.
#[utoipa::path(
    post,
    path = "/api/v1/masses:window",
    tag = "masses",
    operation_id = "masses.window",
    request_body = WindowSearchRequest,
    responses(
        (status = 200, description = "Masses found for the window", body = WindowSearchResponse),
        (status = 400, description = "Missing or invalid day or time", body = ApiError),
        (status = 502, description = "The diocese site failed", body = ApiError),
    )
)]
pub async fn search_window(
    State(state): State<AppState>,
    AppJson(req): AppJson<WindowSearchRequest>,
) -> ApiResponse<WindowSearchResponse> {
    let Some(dia) = req.dia.as_deref().filter(|s| !s.trim().is_empty()) else {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Dia é obrigatório.");
    };
    let Some(horario) = req.horario_inicio.as_deref().filter(|s| !s.trim().is_empty()) else {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            "Horário é obrigatório (HH:MM).",
        );
    };

    let (day, start) = match parse_day_and_time(dia, horario) {
        Ok(parsed) => parsed,
        Err(e) => return ApiResponse::from(e),
    };

    respond(state.aggregator.aggregate(day, start).await, WINDOW_FAILURE_MESSAGE)
}

/// `GET /api/v1/masses:upcoming`
///
/// Same search as `masses:window`, for today's weekday starting now.
#[utoipa::path(
    get,
    path = "/api/v1/masses:upcoming",
    tag = "masses",
    operation_id = "masses.upcoming",
    responses(
        (status = 200, description = "Masses found from now on", body = WindowSearchResponse),
        (status = 502, description = "The diocese site failed", body = ApiError),
    )
)]
pub async fn upcoming(State(state): State<AppState>) -> ApiResponse<WindowSearchResponse> {
    let now = match state.local_now() {
        Ok(now) => now,
        Err(e) => return ApiResponse::from_error(e, UPCOMING_FAILURE_MESSAGE),
    };

    respond(state.aggregator.upcoming(&now).await, UPCOMING_FAILURE_MESSAGE)
}

fn parse_day_and_time(dia: &str, horario: &str) -> Result<(DayToken, TimePoint)> {
    Ok((dia.parse()?, horario.parse()?))
}

fn respond(
    result: Result<WindowSearch>,
    remote_message: &str,
) -> ApiResponse<WindowSearchResponse> {
    match result {
        Ok(search) => {
            let total = search.results.len() as u64;
            ApiResponse::success_with_meta(
                WindowSearchResponse::from(search),
                ResponseMeta { total: Some(total) },
            )
        }
        Err(e) => {
            if e.is_remote() {
                tracing::warn!("Mass search aborted by a remote failure");
            }
            ApiResponse::from_error(e, remote_message)
        }
    }
}
