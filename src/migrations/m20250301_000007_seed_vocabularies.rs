//! Migration: Seed the netconfig and operating system vocabularies

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        seed_netconfigs(db).await?;
        seed_operating_systems(db).await?;
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Seeding is not reversible - names may have been extended since
        Ok(())
    }
}

async fn seed_netconfigs(db: &SchemaManagerConnection<'_>) -> Result<(), DbErr> {
    use crate::models::netconfig;
    use crate::models::prelude::*;

    if NetConfig::find().count(db).await? > 0 {
        return Ok(());
    }

    for name in ["broadband", "umts", "gsm"] {
        let row = netconfig::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        row.insert(db).await?;
    }

    Ok(())
}

async fn seed_operating_systems(db: &SchemaManagerConnection<'_>) -> Result<(), DbErr> {
    use crate::models::operating_system;
    use crate::models::prelude::*;

    if OperatingSystem::find().count(db).await? > 0 {
        return Ok(());
    }

    for name in ["windows", "mac", "linux"] {
        let row = operating_system::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        row.insert(db).await?;
    }

    Ok(())
}
