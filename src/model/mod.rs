//! Wire-level data transfer objects shared by the HTTP API.

pub mod advertisement;
pub mod api;
