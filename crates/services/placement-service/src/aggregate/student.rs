//! Student aggregate.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DatabaseTransaction, DbErr};

use common::AppResult;
use domain::validation::ensure_valid;
use domain::{
    CreateStudent, DomainError, DomainResult, Student, StudentAggregate, UpdateStudent,
    ROLE_STUDENT,
};

use super::descriptor::{AggregateRows, ChildTable, RootTable};
use super::projection::{linked_account, live_children};
use super::{insert_root, AggregateKind};
use crate::repository::entities::{
    account, student, student_address, student_eligibility, student_job_status, student_visa,
};

static ADDRESSES: ChildTable<student_address::Entity> = ChildTable {
    group: "addresses",
    id: student_address::Column::Id,
    owner: student_address::Column::StudentId,
    updated_at: student_address::Column::UpdatedAt,
    deleted_at: student_address::Column::DeletedAt,
    entity: PhantomData,
};

static VISAS: ChildTable<student_visa::Entity> = ChildTable {
    group: "visas",
    id: student_visa::Column::Id,
    owner: student_visa::Column::StudentId,
    updated_at: student_visa::Column::UpdatedAt,
    deleted_at: student_visa::Column::DeletedAt,
    entity: PhantomData,
};

static ELIGIBILITY: ChildTable<student_eligibility::Entity> = ChildTable {
    group: "eligibility",
    id: student_eligibility::Column::Id,
    owner: student_eligibility::Column::StudentId,
    updated_at: student_eligibility::Column::UpdatedAt,
    deleted_at: student_eligibility::Column::DeletedAt,
    entity: PhantomData,
};

static JOB_STATUSES: ChildTable<student_job_status::Entity> = ChildTable {
    group: "job_statuses",
    id: student_job_status::Column::Id,
    owner: student_job_status::Column::StudentId,
    updated_at: student_job_status::Column::UpdatedAt,
    deleted_at: student_job_status::Column::DeletedAt,
    entity: PhantomData,
};

static STUDENT: RootTable<student::Entity> = RootTable {
    name: "Student",
    role: ROLE_STUDENT,
    account_link: account::Column::StudentId,
    id: student::Column::Id,
    updated_at: student::Column::UpdatedAt,
    deleted_at: student::Column::DeletedAt,
    children: &[&ADDRESSES, &VISAS, &ELIGIBILITY, &JOB_STATUSES],
};

pub struct StudentKind;

#[async_trait]
impl AggregateKind for StudentKind {
    type Entity = student::Entity;
    type Root = student::ActiveModel;
    type Draft = CreateStudent;
    type Changes = UpdateStudent;
    type Summary = Student;
    type Output = StudentAggregate;

    fn table() -> &'static RootTable<student::Entity> {
        &STUDENT
    }

    fn rows(
        draft: CreateStudent,
        now: DateTime<Utc>,
    ) -> DomainResult<AggregateRows<student::ActiveModel>> {
        let root = student::ActiveModel {
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            email: Set(draft.email),
            phone: Set(draft.phone),
            date_of_birth: Set(draft.date_of_birth),
            course: Set(draft.course),
            intake: Set(draft.intake),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let addresses: Vec<_> = draft
            .addresses
            .into_iter()
            .map(|a| student_address::ActiveModel {
                address_type: Set(a.address_type),
                street: Set(a.street),
                city: Set(a.city),
                state: Set(a.state),
                postcode: Set(a.postcode),
                country: Set(a.country),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        let visas: Vec<_> = draft
            .visas
            .into_iter()
            .map(|v| student_visa::ActiveModel {
                visa_type: Set(v.visa_type),
                visa_number: Set(v.visa_number),
                expiry_date: Set(v.expiry_date),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        let eligibility: Vec<_> = draft
            .eligibility
            .into_iter()
            .map(|e| student_eligibility::ActiveModel {
                criterion: Set(e.criterion),
                is_eligible: Set(e.is_eligible),
                assessed_on: Set(e.assessed_on),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        let job_statuses: Vec<_> = draft
            .job_statuses
            .into_iter()
            .map(|j| student_job_status::ActiveModel {
                status: Set(j.status),
                employer: Set(j.employer),
                position: Set(j.position),
                effective_date: Set(j.effective_date),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        Ok(AggregateRows::new(root)
            .with(&ADDRESSES, addresses)
            .with(&VISAS, visas)
            .with(&ELIGIBILITY, eligibility)
            .with(&JOB_STATUSES, job_statuses))
    }

    fn check_changes(changes: &UpdateStudent) -> DomainResult<()> {
        ensure_valid(changes)?;
        match changes.date_of_birth {
            Some(Some(dob)) if dob >= Utc::now().date_naive() => Err(DomainError::validation(
                "date_of_birth must be in the past",
            )),
            _ => Ok(()),
        }
    }

    fn apply(
        model: student::Model,
        changes: UpdateStudent,
        now: DateTime<Utc>,
    ) -> student::ActiveModel {
        let mut active: student::ActiveModel = model.into();

        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(date_of_birth) = changes.date_of_birth {
            active.date_of_birth = Set(date_of_birth);
        }
        if let Some(course) = changes.course {
            active.course = Set(course);
        }
        if let Some(intake) = changes.intake {
            active.intake = Set(intake);
        }
        active.updated_at = Set(now);

        active
    }

    async fn insert_root(
        txn: &DatabaseTransaction,
        root: student::ActiveModel,
    ) -> Result<i32, DbErr> {
        insert_root(txn, root).await
    }

    async fn update_root(txn: &DatabaseTransaction, root: student::ActiveModel) -> Result<(), DbErr> {
        root.update(txn).await?;
        Ok(())
    }

    async fn project(db: &DatabaseConnection, model: student::Model) -> AppResult<StudentAggregate> {
        let id = model.id;

        Ok(StudentAggregate {
            student: model.into(),
            addresses: live_children(db, &ADDRESSES, id).await?,
            visas: live_children(db, &VISAS, id).await?,
            eligibility: live_children(db, &ELIGIBILITY, id).await?,
            job_statuses: live_children(db, &JOB_STATUSES, id).await?,
            account: linked_account(db, STUDENT.account_link, id).await?,
        })
    }
}
