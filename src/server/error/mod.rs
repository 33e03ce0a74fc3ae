//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod submission;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, submission::SubmissionError},
};

/// Message returned to clients for any failure without a more specific mapping.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again.";

/// Top-level application error type.
///
/// Aggregates startup and request-time failures. `SubmissionError` carries its own
/// status mapping; every other variant is reported to clients as a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure of the inspection submission pipeline.
    ///
    /// Delegates to `SubmissionError::into_response()` for status code mapping
    /// (400, 404, 408, 413, 500).
    #[error(transparent)]
    SubmissionErr(#[from] SubmissionError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Blob storage client could not be constructed.
    #[error(transparent)]
    ObjectStoreErr(#[from] object_store::Error),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `SubmissionErr`, delegated to `SubmissionError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::SubmissionErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(INTERNAL_ERROR_MESSAGE)),
        )
            .into_response()
    }
}
