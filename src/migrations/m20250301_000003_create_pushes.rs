//! Migration: Create pushes table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pushes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pushes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pushes::Srid).string().not_null())
                    .col(ColumnDef::new(Pushes::Ldap).string().not_null())
                    .col(ColumnDef::new(Pushes::Sha).string().not_null())
                    .col(
                        ColumnDef::new(Pushes::Handled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Pushes::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // srid is the lookup key for status updates
        manager
            .create_index(
                Index::create()
                    .name("idx_pushes_srid")
                    .table(Pushes::Table)
                    .col(Pushes::Srid)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pushes_handled")
                    .table(Pushes::Table)
                    .col(Pushes::Handled)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pushes::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Pushes {
    Table,
    Id,
    Srid,
    Ldap,
    Sha,
    Handled,
    #[iden = "created_at"]
    CreatedAt,
}
