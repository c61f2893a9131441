//! Migration: Create roles table and insert the default roles.

use sea_orm_migration::prelude::*;

use domain::DEFAULT_ROLES;

use super::{deleted_at_column, id_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(id_column(Roles::Id))
                    .col(ColumnDef::new(Roles::Name).string().not_null().unique_key())
                    .col(deleted_at_column(Roles::DeletedAt))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Roles::Table).columns([Roles::Name]);
        for role in DEFAULT_ROLES {
            seed.values_panic([(*role).into()]);
        }
        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Roles {
    Table,
    Id,
    Name,
    DeletedAt,
}
