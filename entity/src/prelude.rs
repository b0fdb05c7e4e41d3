pub use super::advertisement::Entity as Advertisement;
