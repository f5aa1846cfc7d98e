//! Migration: Create push_status matrix table
//!
//! Also backfills one `done` cell per (push, netconfig, os) combination
//! recoverable from the junction tables. Deployments older than this
//! table tracked status only through the junction rows, and anything
//! recorded back then has long since rolled out.

use std::collections::BTreeMap;

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use super::m20250301_000001_create_netconfigs::Netconfigs;
use super::m20250301_000002_create_operating_systems::OperatingSystems;
use super::m20250301_000003_create_pushes::Pushes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PushStatus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PushStatus::PushId).big_integer().not_null())
                    .col(
                        ColumnDef::new(PushStatus::NetconfigId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PushStatus::OsId).big_integer().not_null())
                    .col(ColumnDef::new(PushStatus::Status).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(PushStatus::PushId)
                            .col(PushStatus::NetconfigId)
                            .col(PushStatus::OsId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PushStatus::Table, PushStatus::PushId)
                            .to(Pushes::Table, Pushes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PushStatus::Table, PushStatus::NetconfigId)
                            .to(Netconfigs::Table, Netconfigs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PushStatus::Table, PushStatus::OsId)
                            .to(OperatingSystems::Table, OperatingSystems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        backfill_legacy_pushes(manager.get_connection()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PushStatus::Table).if_exists().to_owned())
            .await
    }
}

/// Fan out junction-table rows for pushes created before push_status
/// existed. Skips entirely when any status rows are already present.
async fn backfill_legacy_pushes(db: &SchemaManagerConnection<'_>) -> Result<(), DbErr> {
    use crate::models::prelude::{PushNetConfig, PushOperatingSystem};
    use crate::models::push_status;

    let existing = push_status::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    #[derive(Default)]
    struct Chosen {
        netconfigs: Vec<i64>,
        operating_systems: Vec<i64>,
    }

    let mut pushes: BTreeMap<i64, Chosen> = BTreeMap::new();

    for row in PushNetConfig::find().all(db).await? {
        pushes
            .entry(row.push_id)
            .or_default()
            .netconfigs
            .push(row.netconfig_id);
    }

    for row in PushOperatingSystem::find().all(db).await? {
        pushes
            .entry(row.push_id)
            .or_default()
            .operating_systems
            .push(row.os_id);
    }

    for (push_id, chosen) in pushes {
        for &netconfig_id in &chosen.netconfigs {
            for &os_id in &chosen.operating_systems {
                let cell = push_status::ActiveModel {
                    push_id: Set(push_id),
                    netconfig_id: Set(netconfig_id),
                    os_id: Set(os_id),
                    status: Set("done".to_string()),
                };
                cell.insert(db).await?;
            }
        }
    }

    Ok(())
}

#[derive(Iden)]
#[iden = "push_status"]
pub enum PushStatus {
    Table,
    #[iden = "push_id"]
    PushId,
    #[iden = "netconfig_id"]
    NetconfigId,
    #[iden = "os_id"]
    OsId,
    Status,
}
