//! Migration: Create push_netconfigs junction table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_netconfigs::Netconfigs;
use super::m20250301_000003_create_pushes::Pushes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PushNetconfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PushNetconfigs::PushId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PushNetconfigs::NetconfigId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PushNetconfigs::PushId)
                            .col(PushNetconfigs::NetconfigId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PushNetconfigs::Table, PushNetconfigs::PushId)
                            .to(Pushes::Table, Pushes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PushNetconfigs::Table, PushNetconfigs::NetconfigId)
                            .to(Netconfigs::Table, Netconfigs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PushNetconfigs::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "push_netconfigs"]
pub enum PushNetconfigs {
    Table,
    #[iden = "push_id"]
    PushId,
    #[iden = "netconfig_id"]
    NetconfigId,
}
