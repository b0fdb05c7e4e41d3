//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into parameters, call the
//! service layer and convert the resulting domain models back into DTOs.

pub mod advertisement;
