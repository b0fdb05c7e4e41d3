use sea_orm::DatabaseConnection;

use crate::{
    model::advertisement::PatchOperationDto,
    server::{
        data::advertisement::AdvertisementRepository,
        error::AppError,
        model::{
            advertisement::{Advertisement, CreateAdvertisementParam, UpdateAdvertisementParam},
            patch::PatchOperation,
        },
        service::patch::apply_patch,
    },
};

pub struct AdvertisementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdvertisementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all advertisements in insertion order
    pub async fn get_all(&self) -> Result<Vec<Advertisement>, AppError> {
        let repo = AdvertisementRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific advertisement by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Advertisement>, AppError> {
        let repo = AdvertisementRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Creates a new advertisement
    pub async fn create(&self, params: CreateAdvertisementParam) -> Result<Advertisement, AppError> {
        let repo = AdvertisementRepository::new(self.db);

        let advertisement = repo.create(params).await?;

        tracing::debug!("Created advertisement {}", advertisement.id);

        Ok(advertisement)
    }

    /// Overwrites company name and slogan of an advertisement
    /// Returns None if the advertisement doesn't exist
    pub async fn update(
        &self,
        params: UpdateAdvertisementParam,
    ) -> Result<Option<Advertisement>, AppError> {
        let repo = AdvertisementRepository::new(self.db);

        let advertisement = repo.update(params).await?;

        if let Some(advertisement) = &advertisement {
            tracing::debug!("Updated advertisement {}", advertisement.id);
        }

        Ok(advertisement)
    }

    /// Applies a patch document to an advertisement and persists the result
    ///
    /// Returns None if the advertisement doesn't exist, before the document is looked
    /// at. When an operation is invalid or fails nothing is written.
    pub async fn patch(
        &self,
        id: i32,
        document: Vec<PatchOperationDto>,
    ) -> Result<Option<Advertisement>, AppError> {
        let repo = AdvertisementRepository::new(self.db);

        let Some(mut advertisement) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let operations = PatchOperation::parse_all(document)?;
        apply_patch(&mut advertisement, &operations)?;

        let advertisement = repo.update(advertisement.into()).await?;

        if advertisement.is_some() {
            tracing::debug!(
                "Patched advertisement {} with {} operation(s)",
                id,
                operations.len()
            );
        }

        Ok(advertisement)
    }

    /// Deletes an advertisement
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AdvertisementRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            tracing::debug!("Deleted advertisement {}", id);
        }

        Ok(deleted)
    }
}
