//! # V1 API Response Envelope & Error Contract
//!
//! Every v1 endpoint returns an [`ApiResponse<T>`] envelope:
//!
//! ```json
//! {
//!   "data": { ... },          // present on success, absent on error
//!   "meta": { "total": 3 },   // optional
//!   "error": { "code": "bad_gateway", "message": "..." }  // present on error
//! }
//! ```
//!
//! Failures of the diocese site surface as `502 bad_gateway`; their details
//! are logged and never echoed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::MissasError;

/// Message returned when the remote lookup fails during a window search.
pub const WINDOW_FAILURE_MESSAGE: &str = "Falha ao processar a busca com janela.";

/// Message returned when the remote lookup fails during an upcoming search.
pub const UPCOMING_FAILURE_MESSAGE: &str = "Falha ao obter próximas missas.";

/// Machine-readable error code included in every error response.
///
/// Serialized as a snake_case string on the wire (e.g. `"invalid_request"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Missing or malformed day/time, or an unreadable body. HTTP 400.
    InvalidRequest,
    /// An unexpected server-side error occurred. HTTP 500.
    InternalError,
    /// The diocese site failed or could not be reached. HTTP 502.
    BadGateway,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway => StatusCode::BAD_GATEWAY,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::InternalError => write!(f, "internal_error"),
            Self::BadGateway => write!(f, "bad_gateway"),
        }
    }
}

/// Structured error payload within the API envelope.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    pub code: ErrorCode,
    /// Human-readable description safe to display to end users.
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Number of items in `data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Canonical v1 API response envelope.
///
/// On success, `data` is present and `error` is absent. On error, `error`
/// is present and `data` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// HTTP status to use in the response. Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            meta: None,
            error: None,
            status: StatusCode::OK,
        }
    }

    pub fn success_with_meta(data: T, meta: ResponseMeta) -> Self {
        Self {
            data: Some(data),
            meta: Some(meta),
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorCode`].
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        Self {
            data: None,
            meta: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Like the [`From<MissasError>`] conversion, but reports remote
    /// failures with `remote_message`.
    pub fn from_error(err: MissasError, remote_message: &str) -> Self {
        match err {
            MissasError::Validation(msg) => ApiResponse::error(ErrorCode::InvalidRequest, msg),

            ref remote @ (MissasError::Http(_) | MissasError::Remote { .. }) => {
                tracing::error!(error = %remote, "Remote lookup failed");
                ApiResponse::error(ErrorCode::BadGateway, remote_message)
            }

            ref internal @ (MissasError::Parse(_) | MissasError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to v1 response");
                ApiResponse::error(ErrorCode::InternalError, "An internal error occurred")
            }
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(_) => {
                let body = serde_json::json!({
                    "error": {
                        "code": "internal_error",
                        "message": "An internal error occurred"
                    }
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<MissasError> for ApiResponse<T> {
    /// Convert a [`MissasError`] into a v1 [`ApiResponse`].
    ///
    /// Remote and internal details are logged via `tracing::error!` and
    /// replaced with a generic message.
    fn from(err: MissasError) -> Self {
        ApiResponse::from_error(err, WINDOW_FAILURE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_serializes_without_error() {
        let resp = ApiResponse::success("hello");
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["data"], "hello");
        assert!(json.get("error").is_none());
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn error_response_serializes_without_data() {
        let resp = ApiResponse::<()>::error(ErrorCode::InvalidRequest, "Dia é obrigatório.");
        let json = serde_json::to_value(&resp).expect("serialize");
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "invalid_request");
        assert_eq!(json["error"]["message"], "Dia é obrigatório.");
    }

    #[test]
    fn success_with_meta_includes_total() {
        let resp = ApiResponse::success_with_meta(vec![1, 2, 3], ResponseMeta { total: Some(3) });
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["meta"]["total"], 3);
    }

    #[test]
    fn error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::InternalError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorCode::BadGateway.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn error_code_serializes_snake_case() {
        let json = serde_json::to_value(&ErrorCode::BadGateway).expect("serialize");
        assert_eq!(json, "bad_gateway");
        assert_eq!(ErrorCode::InvalidRequest.to_string(), "invalid_request");
    }

    #[test]
    fn validation_error_keeps_message() {
        let resp: ApiResponse<()> = MissasError::Validation("Unknown day 'x'".into()).into();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let err = resp.error.expect("error");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "Unknown day 'x'");
    }

    #[test]
    fn remote_error_does_not_leak() {
        let resp: ApiResponse<()> = MissasError::Remote {
            status: 500,
            message: "PHP Fatal error in actions.php".into(),
        }
        .into();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let err = resp.error.expect("error");
        assert_eq!(err.code, ErrorCode::BadGateway);
        assert_eq!(err.message, WINDOW_FAILURE_MESSAGE);
    }

    #[test]
    fn remote_message_is_chosen_by_caller() {
        let resp = ApiResponse::<()>::from_error(
            MissasError::Remote {
                status: 502,
                message: "upstream".into(),
            },
            UPCOMING_FAILURE_MESSAGE,
        );
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(resp.error.expect("error").message, UPCOMING_FAILURE_MESSAGE);

        let resp = ApiResponse::<()>::from_error(
            MissasError::Validation("Unknown day 'x'".into()),
            UPCOMING_FAILURE_MESSAGE,
        );
        assert_eq!(resp.error.expect("error").message, "Unknown day 'x'");
    }

    #[test]
    fn internal_error_does_not_leak() {
        let resp: ApiResponse<()> = MissasError::Internal("secret debug info".into()).into();
        let err = resp.error.expect("error");
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "An internal error occurred");
    }
}
