//! Placement executive aggregate: the executive and the regions they cover.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DatabaseTransaction, DbErr};

use common::AppResult;
use domain::validation::required;
use domain::{
    CreatePlacementExecutive, DomainResult, PlacementExecutive, PlacementExecutiveAggregate,
    UpdatePlacementExecutive, ROLE_PLACEMENT_EXECUTIVE,
};

use super::descriptor::{AggregateRows, ChildTable, RootTable};
use super::projection::{linked_account, live_children};
use super::{insert_root, AggregateKind};
use crate::repository::entities::{account, placement_executive, placement_executive_region};

static REGIONS: ChildTable<placement_executive_region::Entity> = ChildTable {
    group: "regions",
    id: placement_executive_region::Column::Id,
    owner: placement_executive_region::Column::PlacementExecutiveId,
    updated_at: placement_executive_region::Column::UpdatedAt,
    deleted_at: placement_executive_region::Column::DeletedAt,
    entity: PhantomData,
};

static PLACEMENT_EXECUTIVE: RootTable<placement_executive::Entity> = RootTable {
    name: "Placement executive",
    role: ROLE_PLACEMENT_EXECUTIVE,
    account_link: account::Column::PlacementExecutiveId,
    id: placement_executive::Column::Id,
    updated_at: placement_executive::Column::UpdatedAt,
    deleted_at: placement_executive::Column::DeletedAt,
    children: &[&REGIONS],
};

pub struct PlacementExecutiveKind;

#[async_trait]
impl AggregateKind for PlacementExecutiveKind {
    type Entity = placement_executive::Entity;
    type Root = placement_executive::ActiveModel;
    type Draft = CreatePlacementExecutive;
    type Changes = UpdatePlacementExecutive;
    type Summary = PlacementExecutive;
    type Output = PlacementExecutiveAggregate;

    fn table() -> &'static RootTable<placement_executive::Entity> {
        &PLACEMENT_EXECUTIVE
    }

    fn rows(
        draft: CreatePlacementExecutive,
        now: DateTime<Utc>,
    ) -> DomainResult<AggregateRows<placement_executive::ActiveModel>> {
        let root = placement_executive::ActiveModel {
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            email: Set(draft.email),
            phone: Set(draft.phone),
            designation: Set(draft.designation),
            joining_date: Set(required(draft.joining_date, "joining_date")?),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let regions: Vec<_> = draft
            .regions
            .into_iter()
            .map(|r| placement_executive_region::ActiveModel {
                region: Set(r.region),
                state: Set(r.state),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .collect();

        Ok(AggregateRows::new(root).with(&REGIONS, regions))
    }

    fn apply(
        model: placement_executive::Model,
        changes: UpdatePlacementExecutive,
        now: DateTime<Utc>,
    ) -> placement_executive::ActiveModel {
        let mut active: placement_executive::ActiveModel = model.into();

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
        if let Some(designation) = changes.designation {
            active.designation = Set(designation);
        }
        if let Some(joining_date) = changes.joining_date {
            active.joining_date = Set(joining_date);
        }
        active.updated_at = Set(now);

        active
    }

    async fn insert_root(
        txn: &DatabaseTransaction,
        root: placement_executive::ActiveModel,
    ) -> Result<i32, DbErr> {
        insert_root(txn, root).await
    }

    async fn update_root(
        txn: &DatabaseTransaction,
        root: placement_executive::ActiveModel,
    ) -> Result<(), DbErr> {
        root.update(txn).await?;
        Ok(())
    }

    async fn project(
        db: &DatabaseConnection,
        model: placement_executive::Model,
    ) -> AppResult<PlacementExecutiveAggregate> {
        let id = model.id;

        Ok(PlacementExecutiveAggregate {
            placement_executive: model.into(),
            regions: live_children(db, &REGIONS, id).await?,
            account: linked_account(db, PLACEMENT_EXECUTIVE.account_link, id).await?,
        })
    }
}
