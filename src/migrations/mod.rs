pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_netconfigs;
mod m20250301_000002_create_operating_systems;
mod m20250301_000003_create_pushes;
mod m20250301_000004_create_push_netconfigs;
mod m20250301_000005_create_push_operating_systems;
mod m20250301_000006_create_push_status;
mod m20250301_000007_seed_vocabularies;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_netconfigs::Migration),
            Box::new(m20250301_000002_create_operating_systems::Migration),
            Box::new(m20250301_000003_create_pushes::Migration),
            Box::new(m20250301_000004_create_push_netconfigs::Migration),
            Box::new(m20250301_000005_create_push_operating_systems::Migration),
            Box::new(m20250301_000006_create_push_status::Migration),
            Box::new(m20250301_000007_seed_vocabularies::Migration),
        ]
    }
}
