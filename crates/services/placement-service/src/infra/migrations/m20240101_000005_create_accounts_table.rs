//! Migration: Create accounts table linking logins to roles and aggregates.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_roles_table::Roles;
use super::m20240101_000002_create_facility_tables::Facilities;
use super::m20240101_000003_create_placement_executive_tables::PlacementExecutives;
use super::m20240101_000004_create_student_tables::Students;
use super::{deleted_at_column, foreign_key, id_column, index_on, timestamp_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(id_column(Accounts::Id))
                    .col(ColumnDef::new(Accounts::LoginId).string().not_null())
                    .col(ColumnDef::new(Accounts::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Accounts::RoleId).integer().not_null())
                    .col(ColumnDef::new(Accounts::FacilityId).integer().null())
                    .col(ColumnDef::new(Accounts::PlacementExecutiveId).integer().null())
                    .col(ColumnDef::new(Accounts::StudentId).integer().null())
                    .col(
                        ColumnDef::new(Accounts::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(timestamp_column(Accounts::CreatedAt))
                    .col(timestamp_column(Accounts::UpdatedAt))
                    .col(deleted_at_column(Accounts::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_accounts_role_id",
                        Accounts::Table,
                        Accounts::RoleId,
                        Roles::Table,
                        Roles::Id,
                    ))
                    .foreign_key(&mut foreign_key(
                        "fk_accounts_facility_id",
                        Accounts::Table,
                        Accounts::FacilityId,
                        Facilities::Table,
                        Facilities::Id,
                    ))
                    .foreign_key(&mut foreign_key(
                        "fk_accounts_placement_executive_id",
                        Accounts::Table,
                        Accounts::PlacementExecutiveId,
                        PlacementExecutives::Table,
                        PlacementExecutives::Id,
                    ))
                    .foreign_key(&mut foreign_key(
                        "fk_accounts_student_id",
                        Accounts::Table,
                        Accounts::StudentId,
                        Students::Table,
                        Students::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        // Login identifiers are unique across live and soft-deleted accounts
        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_login_id")
                    .table(Accounts::Table)
                    .col(Accounts::LoginId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_accounts_facility_id", Accounts::FacilityId),
            ("idx_accounts_placement_executive_id", Accounts::PlacementExecutiveId),
            ("idx_accounts_student_id", Accounts::StudentId),
            ("idx_accounts_deleted_at", Accounts::DeletedAt),
        ] {
            manager
                .create_index(index_on(name, Accounts::Table, column))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    LoginId,
    PasswordHash,
    RoleId,
    FacilityId,
    PlacementExecutiveId,
    StudentId,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
