//! Migration: Create push_operating_systems junction table

use sea_orm_migration::prelude::*;

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
                    .table(PushOperatingSystems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PushOperatingSystems::PushId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PushOperatingSystems::OsId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PushOperatingSystems::PushId)
                            .col(PushOperatingSystems::OsId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PushOperatingSystems::Table, PushOperatingSystems::PushId)
                            .to(Pushes::Table, Pushes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PushOperatingSystems::Table, PushOperatingSystems::OsId)
                            .to(OperatingSystems::Table, OperatingSystems::Id)
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
                    .table(PushOperatingSystems::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "push_operating_systems"]
pub enum PushOperatingSystems {
    Table,
    #[iden = "push_id"]
    PushId,
    #[iden = "os_id"]
    OsId,
}
