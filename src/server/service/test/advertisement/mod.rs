use serde_json::json;

use crate::{
    model::advertisement::PatchOperationDto,
    server::{
        error::{patch::PatchError, AppError},
        model::advertisement::{CreateAdvertisementParam, UpdateAdvertisementParam},
        service::advertisement::AdvertisementService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;

/// Builds one patch operation as it would arrive on the wire.
fn operation(op: &str, path: &str, value: Option<&str>) -> PatchOperationDto {
    PatchOperationDto {
        op: op.to_string(),
        path: path.to_string(),
        value: value.map(|value| json!(value)),
        from: None,
    }
}
