//! Migration: Create the placement executive aggregate tables.

use sea_orm_migration::prelude::*;

use super::{deleted_at_column, foreign_key, id_column, index_on, timestamp_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlacementExecutives::Table)
                    .if_not_exists()
                    .col(id_column(PlacementExecutives::Id))
                    .col(ColumnDef::new(PlacementExecutives::FirstName).string().not_null())
                    .col(ColumnDef::new(PlacementExecutives::LastName).string().null())
                    .col(ColumnDef::new(PlacementExecutives::Email).string().null())
                    .col(ColumnDef::new(PlacementExecutives::Phone).string().null())
                    .col(ColumnDef::new(PlacementExecutives::Designation).string().null())
                    .col(ColumnDef::new(PlacementExecutives::JoiningDate).date().not_null())
                    .col(timestamp_column(PlacementExecutives::CreatedAt))
                    .col(timestamp_column(PlacementExecutives::UpdatedAt))
                    .col(deleted_at_column(PlacementExecutives::DeletedAt))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_placement_executives_deleted_at",
                PlacementExecutives::Table,
                PlacementExecutives::DeletedAt,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlacementExecutiveRegions::Table)
                    .if_not_exists()
                    .col(id_column(PlacementExecutiveRegions::Id))
                    .col(
                        ColumnDef::new(PlacementExecutiveRegions::PlacementExecutiveId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlacementExecutiveRegions::Region).string().not_null())
                    .col(ColumnDef::new(PlacementExecutiveRegions::State).string().null())
                    .col(timestamp_column(PlacementExecutiveRegions::CreatedAt))
                    .col(timestamp_column(PlacementExecutiveRegions::UpdatedAt))
                    .col(deleted_at_column(PlacementExecutiveRegions::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_placement_executive_regions_placement_executive_id",
                        PlacementExecutiveRegions::Table,
                        PlacementExecutiveRegions::PlacementExecutiveId,
                        PlacementExecutives::Table,
                        PlacementExecutives::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_placement_executive_regions_placement_executive_id",
                PlacementExecutiveRegions::Table,
                PlacementExecutiveRegions::PlacementExecutiveId,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlacementExecutiveRegions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlacementExecutives::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum PlacementExecutives {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Designation,
    JoiningDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum PlacementExecutiveRegions {
    Table,
    Id,
    PlacementExecutiveId,
    Region,
    State,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
