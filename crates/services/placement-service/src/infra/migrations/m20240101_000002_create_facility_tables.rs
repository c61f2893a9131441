//! Migration: Create the facility aggregate tables.

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
                    .table(Facilities::Table)
                    .if_not_exists()
                    .col(id_column(Facilities::Id))
                    .col(ColumnDef::new(Facilities::OrganizationName).string().not_null())
                    .col(ColumnDef::new(Facilities::ContactPerson).string().null())
                    .col(ColumnDef::new(Facilities::Email).string().null())
                    .col(ColumnDef::new(Facilities::Phone).string().null())
                    .col(ColumnDef::new(Facilities::Address).string().null())
                    .col(ColumnDef::new(Facilities::City).string().null())
                    .col(ColumnDef::new(Facilities::State).string().null())
                    .col(ColumnDef::new(Facilities::Postcode).string().null())
                    .col(ColumnDef::new(Facilities::Website).string().null())
                    .col(ColumnDef::new(Facilities::RegistrationDate).date().null())
                    .col(timestamp_column(Facilities::CreatedAt))
                    .col(timestamp_column(Facilities::UpdatedAt))
                    .col(deleted_at_column(Facilities::DeletedAt))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_facilities_deleted_at",
                Facilities::Table,
                Facilities::DeletedAt,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FacilityAttributes::Table)
                    .if_not_exists()
                    .col(id_column(FacilityAttributes::Id))
                    .col(ColumnDef::new(FacilityAttributes::FacilityId).integer().not_null())
                    .col(ColumnDef::new(FacilityAttributes::Name).string().not_null())
                    .col(ColumnDef::new(FacilityAttributes::Value).text().null())
                    .col(timestamp_column(FacilityAttributes::CreatedAt))
                    .col(timestamp_column(FacilityAttributes::UpdatedAt))
                    .col(deleted_at_column(FacilityAttributes::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_facility_attributes_facility_id",
                        FacilityAttributes::Table,
                        FacilityAttributes::FacilityId,
                        Facilities::Table,
                        Facilities::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_facility_attributes_facility_id",
                FacilityAttributes::Table,
                FacilityAttributes::FacilityId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FacilityBranches::Table)
                    .if_not_exists()
                    .col(id_column(FacilityBranches::Id))
                    .col(ColumnDef::new(FacilityBranches::FacilityId).integer().not_null())
                    .col(ColumnDef::new(FacilityBranches::BranchName).string().null())
                    .col(ColumnDef::new(FacilityBranches::Address).string().null())
                    .col(ColumnDef::new(FacilityBranches::City).string().not_null())
                    .col(ColumnDef::new(FacilityBranches::State).string().null())
                    .col(ColumnDef::new(FacilityBranches::Postcode).string().null())
                    .col(ColumnDef::new(FacilityBranches::Phone).string().null())
                    .col(timestamp_column(FacilityBranches::CreatedAt))
                    .col(timestamp_column(FacilityBranches::UpdatedAt))
                    .col(deleted_at_column(FacilityBranches::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_facility_branches_facility_id",
                        FacilityBranches::Table,
                        FacilityBranches::FacilityId,
                        Facilities::Table,
                        Facilities::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_facility_branches_facility_id",
                FacilityBranches::Table,
                FacilityBranches::FacilityId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FacilityAgreements::Table)
                    .if_not_exists()
                    .col(id_column(FacilityAgreements::Id))
                    .col(ColumnDef::new(FacilityAgreements::FacilityId).integer().not_null())
                    .col(ColumnDef::new(FacilityAgreements::AgreementType).string().not_null())
                    .col(ColumnDef::new(FacilityAgreements::StartDate).date().not_null())
                    .col(ColumnDef::new(FacilityAgreements::EndDate).date().null())
                    .col(ColumnDef::new(FacilityAgreements::DocumentUrl).string().null())
                    .col(timestamp_column(FacilityAgreements::CreatedAt))
                    .col(timestamp_column(FacilityAgreements::UpdatedAt))
                    .col(deleted_at_column(FacilityAgreements::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_facility_agreements_facility_id",
                        FacilityAgreements::Table,
                        FacilityAgreements::FacilityId,
                        Facilities::Table,
                        Facilities::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_facility_agreements_facility_id",
                FacilityAgreements::Table,
                FacilityAgreements::FacilityId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FacilityRules::Table)
                    .if_not_exists()
                    .col(id_column(FacilityRules::Id))
                    .col(ColumnDef::new(FacilityRules::FacilityId).integer().not_null())
                    .col(ColumnDef::new(FacilityRules::Title).string().not_null())
                    .col(ColumnDef::new(FacilityRules::Description).text().null())
                    .col(timestamp_column(FacilityRules::CreatedAt))
                    .col(timestamp_column(FacilityRules::UpdatedAt))
                    .col(deleted_at_column(FacilityRules::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_facility_rules_facility_id",
                        FacilityRules::Table,
                        FacilityRules::FacilityId,
                        Facilities::Table,
                        Facilities::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_facility_rules_facility_id",
                FacilityRules::Table,
                FacilityRules::FacilityId,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first
        manager
            .drop_table(Table::drop().table(FacilityRules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FacilityAgreements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FacilityBranches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FacilityAttributes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Facilities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Facilities {
    Table,
    Id,
    OrganizationName,
    ContactPerson,
    Email,
    Phone,
    Address,
    City,
    State,
    Postcode,
    Website,
    RegistrationDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum FacilityAttributes {
    Table,
    Id,
    FacilityId,
    Name,
    Value,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum FacilityBranches {
    Table,
    Id,
    FacilityId,
    BranchName,
    Address,
    City,
    State,
    Postcode,
    Phone,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum FacilityAgreements {
    Table,
    Id,
    FacilityId,
    AgreementType,
    StartDate,
    EndDate,
    DocumentUrl,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum FacilityRules {
    Table,
    Id,
    FacilityId,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
