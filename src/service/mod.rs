//! Loading and writing catalog entities through SeaORM.
//!
//! Both services are stateless; every function borrows a connection, so a
//! [`sea_orm::DatabaseConnection`], a transaction or a mock connection can
//! be passed in.

mod mutation;
mod query;

pub use mutation::*;
pub use query::*;
