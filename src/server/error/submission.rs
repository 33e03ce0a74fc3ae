use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{upload::UploadError, INTERNAL_ERROR_MESSAGE},
};

/// Failures of the inspection submission pipeline.
///
/// Every variant maps to a fixed status code and client-facing message. Details carried
/// by the variants are only written to the server log.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The UDISE code is missing or is not a string of at least six digits.
    #[error("Invalid UDISE code: {0:?}")]
    InvalidIdentifier(Option<String>),

    /// No registered user exists for the UDISE code.
    #[error("No registered user for UDISE code {0}")]
    UnauthorizedIdentifier(String),

    /// The inspection document does not satisfy the stored record's shape.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A board document or room image failed to upload.
    #[error(transparent)]
    UploadFailed(#[from] UploadError),

    /// The request body exceeded the configured body size limit.
    #[error("Request body exceeds the configured size limit")]
    PayloadTooLarge,

    /// The request body could not be decoded as multipart form data.
    #[error("Malformed multipart body: {0}")]
    InvalidForm(String),

    /// The pipeline did not complete within its time budget.
    #[error("Submission exceeded the {0:?} processing budget")]
    Timeout(Duration),

    /// Database failure during lookup or persistence.
    #[error(transparent)]
    Internal(#[from] sea_orm::DbErr),
}

impl SubmissionError {
    /// HTTP status code reported for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::UnauthorizedIdentifier(_) => StatusCode::NOT_FOUND,
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::UploadFailed(err) if err.is_size_limit() => StatusCode::PAYLOAD_TOO_LARGE,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::UploadFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message returned to the client.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidIdentifier(_) => "Invalid UDISE Code".to_string(),
            Self::UnauthorizedIdentifier(_) => {
                "User not found with the provided UDISE code".to_string()
            }
            Self::ValidationFailed(detail) => format!("Validation failed: {}", detail),
            Self::InvalidForm(_) => "Invalid form data".to_string(),
            Self::UploadFailed(err) if err.is_size_limit() => {
                "File too large. Please reduce file size and try again.".to_string()
            }
            Self::PayloadTooLarge => {
                "File too large. Please reduce file size and try again.".to_string()
            }
            Self::Timeout(_) => "Request timeout. Please try again with smaller files.".to_string(),
            Self::UploadFailed(_) | Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Converts submission errors into `{ success: false, error }` JSON responses.
///
/// Client errors are logged at warn level and server errors at error level, always with
/// the full cause. The response body only carries the fixed client message.
impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() || status == StatusCode::REQUEST_TIMEOUT {
            tracing::error!("Inspection submission failed: {}", self);
        } else {
            tracing::warn!("Inspection submission rejected: {}", self);
        }

        (status, Json(ErrorDto::new(self.client_message()))).into_response()
    }
}
