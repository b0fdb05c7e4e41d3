//! Patch engine applying parsed patch operations to an advertisement.

use crate::server::{
    error::patch::PatchError,
    model::{
        advertisement::Advertisement,
        patch::{AdvertisementField, PatchOperation},
    },
};

/// Applies `operations` in order to `advertisement`.
///
/// The operations run against a working copy; `advertisement` is only overwritten once
/// every operation has succeeded, so a failing document leaves it unchanged. The id is
/// never touched. Persisting the result is up to the caller.
pub fn apply_patch(
    advertisement: &mut Advertisement,
    operations: &[PatchOperation],
) -> Result<(), PatchError> {
    let mut working = advertisement.clone();

    for operation in operations {
        match operation {
            PatchOperation::Replace { field, value } => {
                *field_mut(&mut working, *field) = value.clone();
            }
            PatchOperation::Test { field, value } => {
                let actual = field_ref(&working, *field);
                if actual != value.as_str() {
                    return Err(PatchError::TestFailed {
                        path: field.pointer().to_string(),
                        expected: value.clone(),
                        actual: actual.to_string(),
                    });
                }
            }
        }
    }

    *advertisement = working;

    Ok(())
}

fn field_ref(advertisement: &Advertisement, field: AdvertisementField) -> &str {
    match field {
        AdvertisementField::CompanyName => &advertisement.company_name,
        AdvertisementField::Slogan => &advertisement.slogan,
    }
}

fn field_mut(advertisement: &mut Advertisement, field: AdvertisementField) -> &mut String {
    match field {
        AdvertisementField::CompanyName => &mut advertisement.company_name,
        AdvertisementField::Slogan => &mut advertisement.slogan,
    }
}
