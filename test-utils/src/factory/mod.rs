//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let advertisement = factory::create_advertisement(&db).await?;
//!
//! let nike = factory::advertisement::AdvertisementFactory::new(&db)
//!     .company_name("Nike")
//!     .slogan("Just do it!")
//!     .build()
//!     .await?;
//! ```

pub mod advertisement;
pub mod helpers;

pub use advertisement::create_advertisement;
