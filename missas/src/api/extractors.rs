use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use serde::de::DeserializeOwned;

use crate::error::MissasError;

/// `axum::Json` whose rejections use the v1 error envelope.
///
/// Bodies sent as `text/plain` or without a content type are still decoded
/// as JSON, since simple browser forms and `fetch` calls post them that way.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = MissasError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_plain_text_body(req.headers()) {
            let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
            return Ok(AppJson(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| MissasError::Internal("Failed to read request body".to_string()))?;
        serde_json::from_slice(&bytes)
            .map(AppJson)
            .map_err(|e| MissasError::Validation(format!("Invalid JSON: {e}")))
    }
}

/// No content type at all, or `text/plain` with any parameters.
fn is_plain_text_body(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    value
        .to_str()
        .ok()
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("text/plain"))
}

impl From<JsonRejection> for MissasError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> MissasError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            MissasError::Validation(format!("Invalid JSON: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            MissasError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            MissasError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            MissasError::Internal("Failed to read request body".to_string())
        }
        _ => MissasError::Validation(rejection.body_text()),
    }
}
