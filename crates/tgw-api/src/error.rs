//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use tgw_provider::TranscriptError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("videoId query parameter is required")]
    MissingVideoId,

    #[error("Proxy credentials not configured on the server.")]
    ProxyNotConfigured,

    #[error("Transcript not found or disabled: {0}")]
    TranscriptUnavailable(TranscriptError),

    #[error("Video unavailable: {0}")]
    VideoUnavailable(TranscriptError),

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl From<TranscriptError> for ApiError {
    fn from(err: TranscriptError) -> Self {
        if err.is_not_found() {
            ApiError::TranscriptUnavailable(err)
        } else if err.is_unavailable() {
            ApiError::VideoUnavailable(err)
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingVideoId => StatusCode::BAD_REQUEST,
            ApiError::TranscriptUnavailable(_) | ApiError::VideoUnavailable(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::ProxyNotConfigured | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!("An unexpected error occurred: {}", detail);
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_classification() {
        let disabled: ApiError = TranscriptError::TranscriptsDisabled("abc".into()).into();
        assert!(matches!(disabled, ApiError::TranscriptUnavailable(_)));

        let missing: ApiError = TranscriptError::NoTranscriptFound("abc".into()).into();
        assert!(matches!(missing, ApiError::TranscriptUnavailable(_)));

        let gone: ApiError = TranscriptError::VideoUnavailable("abc".into()).into();
        assert!(matches!(gone, ApiError::VideoUnavailable(_)));

        let blocked: ApiError = TranscriptError::IpBlocked("bot check".into()).into();
        assert!(matches!(blocked, ApiError::Internal(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingVideoId.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ProxyNotConfigured.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(TranscriptError::TranscriptsDisabled("abc".into()))
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(TranscriptError::VideoUnavailable("abc".into()))
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_templates() {
        let err = ApiError::from(TranscriptError::TranscriptsDisabled("abc".into()));
        assert!(err
            .to_string()
            .starts_with("Transcript not found or disabled:"));

        let err = ApiError::from(TranscriptError::VideoUnavailable("abc".into()));
        assert!(err.to_string().starts_with("Video unavailable:"));

        let err = ApiError::Internal("upstream exploded".into());
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred: upstream exploded"
        );
    }
}
