pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_category_and_reason;
mod m20240301_000002_create_activity;
mod m20240301_000003_create_box;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_category_and_reason::Migration),
            Box::new(m20240301_000002_create_activity::Migration),
            Box::new(m20240301_000003_create_box::Migration),
        ]
    }
}
