use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::v1::response::ApiResponse;

#[derive(Error, Debug)]
pub enum MissasError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote lookup failed with status {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl MissasError {
    /// True when the failure came from the diocese site rather than from
    /// the caller or from this service.
    pub fn is_remote(&self) -> bool {
        matches!(self, MissasError::Http(_) | MissasError::Remote { .. })
    }
}

impl IntoResponse for MissasError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, MissasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_status_is_in_message() {
        let err = MissasError::Remote {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.is_remote());
    }

    #[test]
    fn validation_is_not_remote() {
        assert!(!MissasError::Validation("bad".into()).is_remote());
    }

    #[test]
    fn into_response_maps_status() {
        use axum::http::StatusCode;

        let resp = MissasError::Validation("bad day".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = MissasError::Remote {
            status: 500,
            message: String::new(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
