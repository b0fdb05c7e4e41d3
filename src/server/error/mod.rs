//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` for
//! automatic error handling in API endpoints.

pub mod advertisement;
pub mod auth;
pub mod config;
pub mod patch;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        advertisement::AdvertisementError, auth::AuthError, config::ConfigError,
        patch::PatchError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors handle their own
/// response mapping, while infrastructure errors become 500 responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Advertisement lookup error, delegated to `AdvertisementError::into_response()`.
    #[error(transparent)]
    AdvertisementErr(#[from] AdvertisementError),

    /// Patch document parse or application error, delegated to
    /// `PatchError::into_response()`.
    #[error(transparent)]
    PatchErr(#[from] PatchError),

    /// Request body could not be deserialized into the expected payload.
    ///
    /// Results in 400 Bad Request with the rejection message as plain text.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter could not be parsed, e.g. a non-numeric id.
    ///
    /// Results in 400 Bad Request with the rejection message as plain text.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For advertisement, patch, body and path rejection errors
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::AdvertisementErr(err) => err.into_response(),
            Self::PatchErr(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
            }
            Self::PathRejection(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
