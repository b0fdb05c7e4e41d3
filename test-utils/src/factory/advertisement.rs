//! Advertisement factory for creating test advertisement rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test advertisements with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::advertisement::AdvertisementFactory;
///
/// let advertisement = AdvertisementFactory::new(&db)
///     .company_name("Volvo")
///     .slogan("For life.")
///     .build()
///     .await?;
/// ```
pub struct AdvertisementFactory<'a> {
    db: &'a DatabaseConnection,
    company_name: String,
    slogan: String,
}

impl<'a> AdvertisementFactory<'a> {
    /// Creates a new AdvertisementFactory with default values.
    ///
    /// Defaults:
    /// - company_name: `"Company {n}"` where n is auto-incremented
    /// - slogan: `"Slogan {n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            company_name: format!("Company {}", n),
            slogan: format!("Slogan {}", n),
        }
    }

    /// Sets the company name for the advertisement.
    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    /// Sets the slogan for the advertisement.
    pub fn slogan(mut self, slogan: impl Into<String>) -> Self {
        self.slogan = slogan.into();
        self
    }

    /// Builds and inserts the advertisement into the database.
    ///
    /// # Returns
    /// - `Ok(entity::advertisement::Model)` - Created advertisement with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::advertisement::Model, DbErr> {
        entity::advertisement::ActiveModel {
            company_name: ActiveValue::Set(self.company_name),
            slogan: ActiveValue::Set(self.slogan),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an advertisement with default values.
///
/// Shorthand for `AdvertisementFactory::new(db).build().await`.
pub async fn create_advertisement(
    db: &DatabaseConnection,
) -> Result<entity::advertisement::Model, DbErr> {
    AdvertisementFactory::new(db).build().await
}
