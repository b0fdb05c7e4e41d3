use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token could not be decoded, has a bad signature, wrong issuer or is expired.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The token is valid but its roles do not grant the required permission.
    #[error("Access denied for {subject}: {reason}")]
    AccessDenied { subject: String, reason: String },

    /// Signing a new token failed.
    #[error("Failed to issue token: {0}")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `TokenIssue` → 500 Internal Server Error
///
/// Details are logged at debug level while the client receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::TokenIssue(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
