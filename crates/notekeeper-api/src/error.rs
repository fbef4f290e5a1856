//! HTTP error mapping.
//!
//! Every error response carries a `{"detail": "..."}` body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Detail message for a missing note.
pub const NOTE_NOT_FOUND: &str = "Note not found";

#[derive(Debug)]
pub enum ApiError {
    /// Storage failure.
    Database(notekeeper_core::Error),
    NotFound(String),
    /// Well-formed request whose fields or path parameters are invalid.
    Validation(String),
    /// Extractor rejection that already knows its status.
    Rejected(StatusCode, String),
}

impl ApiError {
    pub fn note_not_found() -> Self {
        ApiError::NotFound(NOTE_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected(status, _) => *status,
        }
    }
}

impl From<notekeeper_core::Error> for ApiError {
    fn from(err: notekeeper_core::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let detail = match self {
            ApiError::Database(err) => {
                tracing::error!(
                    subsystem = "api",
                    error = %err,
                    "Request failed with server error"
                );
                "Internal Server Error".to_string()
            }
            ApiError::NotFound(msg)
            | ApiError::Validation(msg)
            | ApiError::Rejected(_, msg) => msg,
        };

        let body = Json(serde_json::json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}
