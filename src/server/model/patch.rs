//! Typed patch operations.
//!
//! Patch documents arrive as free-form `{op, path, value}` objects. They are parsed here
//! into operations over the closed set of patchable advertisement fields so that the
//! patch engine never sees an unknown path or verb.

use serde_json::Value;

use crate::{model::advertisement::PatchOperationDto, server::error::patch::PatchError};

/// Fields of an advertisement that a patch document may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertisementField {
    CompanyName,
    Slogan,
}

impl AdvertisementField {
    /// JSON pointer addressing this field in the external representation.
    pub fn pointer(self) -> &'static str {
        match self {
            Self::CompanyName => "/companyName",
            Self::Slogan => "/slogan",
        }
    }

    /// Resolves a JSON pointer to a patchable field.
    ///
    /// Property names are matched ASCII-case-insensitively. Only single-segment pointers
    /// are accepted since both fields are scalars.
    pub fn from_pointer(path: &str) -> Result<Self, PatchError> {
        let Some(segment) = path.strip_prefix('/') else {
            return Err(PatchError::Validation(format!(
                "The path '{}' is not a valid JSON pointer.",
                path
            )));
        };

        if segment.contains('/') {
            return Err(PatchError::Validation(format!(
                "The target location specified by path '{}' was not found.",
                path
            )));
        }

        if segment.eq_ignore_ascii_case("companyName") {
            Ok(Self::CompanyName)
        } else if segment.eq_ignore_ascii_case("slogan") {
            Ok(Self::Slogan)
        } else if segment.eq_ignore_ascii_case("id") {
            Err(PatchError::Validation(
                "The target location specified by path '/id' cannot be patched.".to_string(),
            ))
        } else {
            Err(PatchError::Validation(format!(
                "The target location specified by path segment '{}' was not found.",
                segment
            )))
        }
    }
}

/// A parsed patch operation.
///
/// Only `replace` and `test` have meaning on required scalar fields; every other verb
/// is rejected while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOperation {
    /// Sets the field to `value`.
    Replace {
        field: AdvertisementField,
        value: String,
    },
    /// Fails the whole document unless the field currently equals `value`.
    Test {
        field: AdvertisementField,
        value: String,
    },
}

impl PatchOperation {
    /// Parses every operation of a document, stopping at the first invalid one.
    pub fn parse_all(operations: Vec<PatchOperationDto>) -> Result<Vec<Self>, PatchError> {
        operations.into_iter().map(Self::try_from).collect()
    }
}

impl TryFrom<PatchOperationDto> for PatchOperation {
    type Error = PatchError;

    fn try_from(dto: PatchOperationDto) -> Result<Self, Self::Error> {
        let op = dto.op.to_ascii_lowercase();

        match op.as_str() {
            "replace" | "test" => {
                let field = AdvertisementField::from_pointer(&dto.path)?;
                let value = string_value(field, dto.value)?;

                if op == "replace" {
                    Ok(Self::Replace { field, value })
                } else {
                    Ok(Self::Test { field, value })
                }
            }
            _ => Err(PatchError::UnsupportedOperation(dto.op)),
        }
    }
}

/// Extracts the string payload an operation on `field` requires.
fn string_value(field: AdvertisementField, value: Option<Value>) -> Result<String, PatchError> {
    match value {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(PatchError::Validation(format!(
            "The value '{}' is invalid for target location '{}'.",
            other,
            field.pointer()
        ))),
        None => Err(PatchError::Validation(format!(
            "A value is required for target location '{}'.",
            field.pointer()
        ))),
    }
}
