use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error body returned for authentication failures and internal errors.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
