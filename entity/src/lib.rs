//! SeaORM entity definitions for the advertisement database.

pub mod prelude;

pub mod advertisement;
