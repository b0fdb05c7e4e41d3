use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors produced while parsing or applying a patch document.
///
/// All variants map to 400 Bad Request with the message as a plain text body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The operation targets a path that is not a patchable field, or its value is
    /// missing or of the wrong type.
    #[error("{0}")]
    Validation(String),

    /// The operation verb is unknown or not supported on an advertisement.
    #[error("The '{0}' operation is not supported on an advertisement.")]
    UnsupportedOperation(String),

    /// A `test` operation found a value different from the expected one.
    #[error("The current value '{actual}' at path '{path}' is not equal to the test value '{expected}'.")]
    TestFailed {
        path: String,
        expected: String,
        actual: String,
    },
}

impl IntoResponse for PatchError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
