//! Advertisement data repository for database operations
//!
//! Provides the `AdvertisementRepository` for managing advertisement rows. Handles the
//! conversion of database entity models into domain models for usage within services
//! & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::advertisement::{
    Advertisement, CreateAdvertisementParam, UpdateAdvertisementParam,
};

/// Repository providing database operations for advertisements.
pub struct AdvertisementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdvertisementRepository<'a> {
    /// Creates a new AdvertisementRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new advertisement, letting the database assign its id.
    ///
    /// # Arguments
    /// - `param` - Company name and slogan of the new advertisement
    ///
    /// # Returns
    /// - `Ok(Advertisement)` - The created advertisement including its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateAdvertisementParam) -> Result<Advertisement, DbErr> {
        let model = entity::advertisement::ActiveModel {
            company_name: ActiveValue::Set(param.company_name),
            slogan: ActiveValue::Set(param.slogan),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Advertisement::from_entity(model))
    }

    /// Gets every advertisement in ascending id order.
    pub async fn get_all(&self) -> Result<Vec<Advertisement>, DbErr> {
        let models = entity::prelude::Advertisement::find()
            .order_by_asc(entity::advertisement::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Advertisement::from_entity).collect())
    }

    /// Finds an advertisement by id
    ///
    /// # Returns
    /// - `Ok(Some(Advertisement))` - The advertisement exists
    /// - `Ok(None)` - No advertisement has this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Advertisement>, DbErr> {
        let model = entity::prelude::Advertisement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(model.map(Advertisement::from_entity))
    }

    /// Overwrites company name and slogan of an existing advertisement.
    ///
    /// # Returns
    /// - `Ok(Some(Advertisement))` - The updated advertisement
    /// - `Ok(None)` - No advertisement has `param.id`; nothing was written
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        param: UpdateAdvertisementParam,
    ) -> Result<Option<Advertisement>, DbErr> {
        let Some(existing) = entity::prelude::Advertisement::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::advertisement::ActiveModel = existing.into();
        active.company_name = ActiveValue::Set(param.company_name);
        active.slogan = ActiveValue::Set(param.slogan);

        let model = active.update(self.db).await?;

        Ok(Some(Advertisement::from_entity(model)))
    }

    /// Deletes the advertisement with the provided id
    ///
    /// # Returns
    /// - `Ok(true)` - The advertisement was deleted
    /// - `Ok(false)` - No advertisement has this id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Advertisement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any advertisement uses the given company name.
    pub async fn exists_by_company_name(&self, company_name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Advertisement::find()
            .filter(entity::advertisement::Column::CompanyName.eq(company_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
