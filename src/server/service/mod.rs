//! Business logic layer between controllers and repositories.

pub mod advertisement;
pub mod patch;
pub mod token;
