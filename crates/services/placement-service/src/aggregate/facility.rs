//! Facility aggregate: attributes, branches, agreements and rules.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DatabaseTransaction, DbErr};

use common::AppResult;
use domain::validation::required;
use domain::{
    CreateFacility, DomainResult, Facility, FacilityAggregate, UpdateFacility, ROLE_FACILITY,
};

use super::descriptor::{AggregateRows, ChildTable, RootTable};
use super::projection::{linked_account, live_children};
use super::{insert_root, AggregateKind};
use crate::repository::entities::{
    account, facility, facility_agreement, facility_attribute, facility_branch, facility_rule,
};

static ATTRIBUTES: ChildTable<facility_attribute::Entity> = ChildTable {
    group: "attributes",
    id: facility_attribute::Column::Id,
    owner: facility_attribute::Column::FacilityId,
    updated_at: facility_attribute::Column::UpdatedAt,
    deleted_at: facility_attribute::Column::DeletedAt,
    entity: PhantomData,
};

static BRANCHES: ChildTable<facility_branch::Entity> = ChildTable {
    group: "branches",
    id: facility_branch::Column::Id,
    owner: facility_branch::Column::FacilityId,
    updated_at: facility_branch::Column::UpdatedAt,
    deleted_at: facility_branch::Column::DeletedAt,
    entity: PhantomData,
};

static AGREEMENTS: ChildTable<facility_agreement::Entity> = ChildTable {
    group: "agreements",
    id: facility_agreement::Column::Id,
    owner: facility_agreement::Column::FacilityId,
    updated_at: facility_agreement::Column::UpdatedAt,
    deleted_at: facility_agreement::Column::DeletedAt,
    entity: PhantomData,
};

static RULES: ChildTable<facility_rule::Entity> = ChildTable {
    group: "rules",
    id: facility_rule::Column::Id,
    owner: facility_rule::Column::FacilityId,
    updated_at: facility_rule::Column::UpdatedAt,
    deleted_at: facility_rule::Column::DeletedAt,
    entity: PhantomData,
};

static FACILITY: RootTable<facility::Entity> = RootTable {
    name: "Facility",
    role: ROLE_FACILITY,
    account_link: account::Column::FacilityId,
    id: facility::Column::Id,
    updated_at: facility::Column::UpdatedAt,
    deleted_at: facility::Column::DeletedAt,
    children: &[&ATTRIBUTES, &BRANCHES, &AGREEMENTS, &RULES],
};

pub struct FacilityKind;

#[async_trait]
impl AggregateKind for FacilityKind {
    type Entity = facility::Entity;
    type Root = facility::ActiveModel;
    type Draft = CreateFacility;
    type Changes = UpdateFacility;
    type Summary = Facility;
    type Output = FacilityAggregate;

    fn table() -> &'static RootTable<facility::Entity> {
        &FACILITY
    }

    fn rows(
        draft: CreateFacility,
        now: DateTime<Utc>,
    ) -> DomainResult<AggregateRows<facility::ActiveModel>> {
        let root = facility::ActiveModel {
            organization_name: Set(draft.organization_name),
            contact_person: Set(draft.contact_person),
            email: Set(draft.email),
            phone: Set(draft.phone),
            address: Set(draft.address),
            city: Set(draft.city),
            state: Set(draft.state),
            postcode: Set(draft.postcode),
            website: Set(draft.website),
            registration_date: Set(draft.registration_date),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let attributes: Vec<_> = draft
            .attributes
            .into_iter()
            .map(|a| facility_attribute::ActiveModel {
                name: Set(a.name),
                value: Set(a.value),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        let branches: Vec<_> = draft
            .branches
            .into_iter()
            .map(|b| facility_branch::ActiveModel {
                branch_name: Set(b.branch_name),
                address: Set(b.address),
                city: Set(b.city),
                state: Set(b.state),
                postcode: Set(b.postcode),
                phone: Set(b.phone),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        let agreements = draft
            .agreements
            .into_iter()
            .map(|a| {
                Ok(facility_agreement::ActiveModel {
                    agreement_type: Set(a.agreement_type),
                    start_date: Set(required(a.start_date, "start_date")?),
                    end_date: Set(a.end_date),
                    document_url: Set(a.document_url),
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                    ..Default::default()
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let rules: Vec<_> = draft
            .rules
            .into_iter()
            .map(|r| facility_rule::ActiveModel {
                title: Set(r.title),
                description: Set(r.description),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        Ok(AggregateRows::new(root)
            .with(&ATTRIBUTES, attributes)
            .with(&BRANCHES, branches)
            .with(&AGREEMENTS, agreements)
            .with(&RULES, rules))
    }

    fn apply(
        model: facility::Model,
        changes: UpdateFacility,
        now: DateTime<Utc>,
    ) -> facility::ActiveModel {
        let mut active: facility::ActiveModel = model.into();

        if let Some(organization_name) = changes.organization_name {
            active.organization_name = Set(organization_name);
        }
        if let Some(contact_person) = changes.contact_person {
            active.contact_person = Set(contact_person);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(address) = changes.address {
            active.address = Set(address);
        }
        if let Some(city) = changes.city {
            active.city = Set(city);
        }
        if let Some(state) = changes.state {
            active.state = Set(state);
        }
        if let Some(postcode) = changes.postcode {
            active.postcode = Set(postcode);
        }
        if let Some(website) = changes.website {
            active.website = Set(website);
        }
        if let Some(registration_date) = changes.registration_date {
            active.registration_date = Set(registration_date);
        }
        active.updated_at = Set(now);

        active
    }

    async fn insert_root(
        txn: &DatabaseTransaction,
        root: facility::ActiveModel,
    ) -> Result<i32, DbErr> {
        insert_root(txn, root).await
    }

    async fn update_root(
        txn: &DatabaseTransaction,
        root: facility::ActiveModel,
    ) -> Result<(), DbErr> {
        root.update(txn).await?;
        Ok(())
    }

    async fn project(
        db: &DatabaseConnection,
        model: facility::Model,
    ) -> AppResult<FacilityAggregate> {
        let id = model.id;

        Ok(FacilityAggregate {
            facility: model.into(),
            attributes: live_children(db, &ATTRIBUTES, id).await?,
            branches: live_children(db, &BRANCHES, id).await?,
            agreements: live_children(db, &AGREEMENTS, id).await?,
            rules: live_children(db, &RULES, id).await?,
            account: linked_account(db, FACILITY.account_link, id).await?,
        })
    }
}
