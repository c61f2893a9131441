//! Migration: Create the student aggregate tables.

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
                    .table(Students::Table)
                    .if_not_exists()
                    .col(id_column(Students::Id))
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::LastName).string().null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::DateOfBirth).date().null())
                    .col(ColumnDef::new(Students::Course).string().null())
                    .col(ColumnDef::new(Students::Intake).string().null())
                    .col(timestamp_column(Students::CreatedAt))
                    .col(timestamp_column(Students::UpdatedAt))
                    .col(deleted_at_column(Students::DeletedAt))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_students_deleted_at",
                Students::Table,
                Students::DeletedAt,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentAddresses::Table)
                    .if_not_exists()
                    .col(id_column(StudentAddresses::Id))
                    .col(ColumnDef::new(StudentAddresses::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentAddresses::AddressType).string().not_null())
                    .col(ColumnDef::new(StudentAddresses::Street).string().null())
                    .col(ColumnDef::new(StudentAddresses::City).string().null())
                    .col(ColumnDef::new(StudentAddresses::State).string().null())
                    .col(ColumnDef::new(StudentAddresses::Postcode).string().null())
                    .col(ColumnDef::new(StudentAddresses::Country).string().null())
                    .col(timestamp_column(StudentAddresses::CreatedAt))
                    .col(timestamp_column(StudentAddresses::UpdatedAt))
                    .col(deleted_at_column(StudentAddresses::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_student_addresses_student_id",
                        StudentAddresses::Table,
                        StudentAddresses::StudentId,
                        Students::Table,
                        Students::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_student_addresses_student_id",
                StudentAddresses::Table,
                StudentAddresses::StudentId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentVisas::Table)
                    .if_not_exists()
                    .col(id_column(StudentVisas::Id))
                    .col(ColumnDef::new(StudentVisas::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentVisas::VisaType).string().not_null())
                    .col(ColumnDef::new(StudentVisas::VisaNumber).string().null())
                    .col(ColumnDef::new(StudentVisas::ExpiryDate).date().null())
                    .col(timestamp_column(StudentVisas::CreatedAt))
                    .col(timestamp_column(StudentVisas::UpdatedAt))
                    .col(deleted_at_column(StudentVisas::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_student_visas_student_id",
                        StudentVisas::Table,
                        StudentVisas::StudentId,
                        Students::Table,
                        Students::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_student_visas_student_id",
                StudentVisas::Table,
                StudentVisas::StudentId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentEligibility::Table)
                    .if_not_exists()
                    .col(id_column(StudentEligibility::Id))
                    .col(ColumnDef::new(StudentEligibility::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentEligibility::Criterion).string().not_null())
                    .col(
                        ColumnDef::new(StudentEligibility::IsEligible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(StudentEligibility::AssessedOn).date().null())
                    .col(timestamp_column(StudentEligibility::CreatedAt))
                    .col(timestamp_column(StudentEligibility::UpdatedAt))
                    .col(deleted_at_column(StudentEligibility::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_student_eligibility_student_id",
                        StudentEligibility::Table,
                        StudentEligibility::StudentId,
                        Students::Table,
                        Students::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_student_eligibility_student_id",
                StudentEligibility::Table,
                StudentEligibility::StudentId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentJobStatuses::Table)
                    .if_not_exists()
                    .col(id_column(StudentJobStatuses::Id))
                    .col(ColumnDef::new(StudentJobStatuses::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentJobStatuses::Status).string().not_null())
                    .col(ColumnDef::new(StudentJobStatuses::Employer).string().null())
                    .col(ColumnDef::new(StudentJobStatuses::Position).string().null())
                    .col(ColumnDef::new(StudentJobStatuses::EffectiveDate).date().null())
                    .col(timestamp_column(StudentJobStatuses::CreatedAt))
                    .col(timestamp_column(StudentJobStatuses::UpdatedAt))
                    .col(deleted_at_column(StudentJobStatuses::DeletedAt))
                    .foreign_key(&mut foreign_key(
                        "fk_student_job_statuses_student_id",
                        StudentJobStatuses::Table,
                        StudentJobStatuses::StudentId,
                        Students::Table,
                        Students::Id,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index_on(
                "idx_student_job_statuses_student_id",
                StudentJobStatuses::Table,
                StudentJobStatuses::StudentId,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentJobStatuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentEligibility::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentVisas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentAddresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Course,
    Intake,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum StudentAddresses {
    Table,
    Id,
    StudentId,
    AddressType,
    Street,
    City,
    State,
    Postcode,
    Country,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum StudentVisas {
    Table,
    Id,
    StudentId,
    VisaType,
    VisaNumber,
    ExpiryDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum StudentEligibility {
    Table,
    Id,
    StudentId,
    Criterion,
    IsEligible,
    AssessedOn,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum StudentJobStatuses {
    Table,
    Id,
    StudentId,
    Status,
    Employer,
    Position,
    EffectiveDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
