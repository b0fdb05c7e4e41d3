//! Advertisement domain model and parameters.
//!
//! Holds the conversions between the persisted entity, the domain model and the wire
//! DTOs. None of the conversions validate their input: empty strings and long values are
//! stored as given.

use crate::model::advertisement::{AdvertisementDto, UpdateAdvertisementDto};

/// A persisted advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    /// Store-assigned identity; never changes after creation.
    pub id: i32,
    pub company_name: String,
    pub slogan: String,
}

impl Advertisement {
    /// Converts an entity model to the advertisement domain model.
    pub fn from_entity(entity: entity::advertisement::Model) -> Self {
        Self {
            id: entity.id,
            company_name: entity.company_name,
            slogan: entity.slogan,
        }
    }

    /// Converts the domain model into its external representation, dropping the id.
    pub fn into_dto(self) -> AdvertisementDto {
        AdvertisementDto {
            company_name: self.company_name,
            slogan: self.slogan,
        }
    }
}

/// Parameters for creating a new advertisement.
///
/// Carries no id; the store assigns one on insert.
#[derive(Debug, Clone)]
pub struct CreateAdvertisementParam {
    pub company_name: String,
    pub slogan: String,
}

impl CreateAdvertisementParam {
    /// Builds create parameters from the request payload.
    pub fn from_dto(dto: AdvertisementDto) -> Self {
        Self {
            company_name: dto.company_name,
            slogan: dto.slogan,
        }
    }
}

/// Parameters for overwriting every mutable field of an existing advertisement.
#[derive(Debug, Clone)]
pub struct UpdateAdvertisementParam {
    pub id: i32,
    pub company_name: String,
    pub slogan: String,
}

impl UpdateAdvertisementParam {
    /// Builds update parameters from the full-update payload.
    pub fn from_dto(dto: UpdateAdvertisementDto) -> Self {
        Self {
            id: dto.id,
            company_name: dto.company_name,
            slogan: dto.slogan,
        }
    }
}

impl From<Advertisement> for UpdateAdvertisementParam {
    fn from(advertisement: Advertisement) -> Self {
        Self {
            id: advertisement.id,
            company_name: advertisement.company_name,
            slogan: advertisement.slogan,
        }
    }
}
