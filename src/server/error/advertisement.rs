use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised when an advertisement id does not resolve to a record.
///
/// Both variants are reported as 400 Bad Request with a plain text body, which is what
/// existing clients of the API expect.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdvertisementError {
    /// No advertisement with the given id exists.
    #[error("Advertisement not found.")]
    NotFound(i32),

    /// The advertisement targeted for deletion does not exist.
    ///
    /// Kept separate from `NotFound` because the delete endpoint has always answered
    /// without the trailing period.
    #[error("Advertisement not found")]
    DeleteTargetNotFound(i32),
}

impl IntoResponse for AdvertisementError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(id) | Self::DeleteTargetNotFound(id) => {
                tracing::debug!("Advertisement {} not found", id);
            }
        }

        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
