use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// External representation of an advertisement.
///
/// Used both as the create payload and as every response body. The identity key is
/// never part of this representation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementDto {
    #[schema(example = "Nike")]
    pub company_name: String,
    #[schema(example = "Just do it!")]
    pub slogan: String,
}

/// Full-update payload identifying the advertisement by id in the body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdvertisementDto {
    pub id: i32,
    pub company_name: String,
    pub slogan: String,
}

/// A single JSON Patch operation as received on the wire.
///
/// Only `op` and `path` are required by the document format; whether `value` or
/// `from` must be present depends on the operation and is checked when the
/// operation is parsed into its typed form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PatchOperationDto {
    #[schema(example = "replace")]
    pub op: String,
    #[schema(example = "/slogan")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>, example = "Win.")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}
