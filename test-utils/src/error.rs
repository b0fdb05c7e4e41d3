use sea_orm::DbErr;
use thiserror::Error;

/// Errors that can occur while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create a table.
    #[error(transparent)]
    Database(#[from] DbErr),
}
