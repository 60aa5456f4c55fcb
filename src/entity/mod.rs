//! SeaORM entities backing the catalog.
//!
//! Table and column names follow the database schema created by
//! `bigbox-migration`; the JSON shapes exposed to API clients live in
//! [`crate::serializer`].

pub mod prelude;

pub mod activity;
pub mod activity_image;
pub mod activity_reason;
pub mod r#box;
pub mod box_image;
pub mod category;
pub mod reason;
