pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_marine_table;
mod m20251018_000002_create_piratecrew_table;
mod m20251018_000003_create_piratemember_table;
mod m20251018_000004_create_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_marine_table::Migration),
            Box::new(m20251018_000002_create_piratecrew_table::Migration),
            Box::new(m20251018_000003_create_piratemember_table::Migration),
            Box::new(m20251018_000004_create_event_table::Migration),
        ]
    }
}
