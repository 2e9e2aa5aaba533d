//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eventsproject_domain::error::{EventsError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Error reported by the service or domain.
    Domain(EventsError),
    /// The request body could not be read as the expected JSON record.
    Body(JsonRejection),
}

impl From<EventsError> for ApiError {
    fn from(err: EventsError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(EventsError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(EventsError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(EventsError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Body(JsonRejection::MissingJsonContentType(rejection)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, rejection.body_text())
            }
            Self::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
