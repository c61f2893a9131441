//! Aggregate persistence.
//!
//! One generic writer, one set of deletes and one read projection serve every
//! aggregate type. A type plugs in by implementing [`AggregateKind`]: it
//! declares its tables and maps payloads to rows and rows to responses.

mod credentials;
pub mod descriptor;
mod facility;
mod placement_executive;
mod projection;
mod student;
mod writer;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PrimaryKeyTrait,
};
use serde::Serialize;
use validator::Validate;

use common::AppResult;
use domain::validation::ensure_valid;
use domain::{Draft, DomainResult};

pub use descriptor::{AggregateRows, ChildGroup, ChildTable, RootTable};
pub use facility::FacilityKind;
pub use placement_executive::PlacementExecutiveKind;
pub use student::StudentKind;

pub(crate) use credentials::provision;
pub(crate) use projection::{find_live_root, list_live};
pub(crate) use writer::{hard_delete, soft_delete, write};

/// An aggregate type: its tables, payloads and row mappings.
#[async_trait]
pub trait AggregateKind: Send + Sync + 'static {
    type Entity: EntityTrait;
    type Root: ActiveModelTrait<Entity = Self::Entity> + Send + 'static;
    /// Create payload
    type Draft: Draft + Send + 'static;
    /// Update payload (root scalars only)
    type Changes: Validate + Send + 'static;
    /// Root fields alone, as listed
    type Summary: From<<Self::Entity as EntityTrait>::Model> + Serialize + Send;
    /// Root plus live children and account
    type Output: Serialize + Send;

    fn table() -> &'static RootTable<Self::Entity>;

    /// Map a checked payload to the rows to insert.
    fn rows(draft: Self::Draft, now: DateTime<Utc>) -> DomainResult<AggregateRows<Self::Root>>;

    fn check_changes(changes: &Self::Changes) -> DomainResult<()> {
        ensure_valid(changes)
    }

    /// Apply an update payload to a live root.
    fn apply(
        model: <Self::Entity as EntityTrait>::Model,
        changes: Self::Changes,
        now: DateTime<Utc>,
    ) -> Self::Root;

    async fn insert_root(txn: &DatabaseTransaction, root: Self::Root) -> Result<i32, DbErr>;

    async fn update_root(txn: &DatabaseTransaction, root: Self::Root) -> Result<(), DbErr>;

    /// Load live children and the linked account around a root.
    async fn project(
        db: &DatabaseConnection,
        model: <Self::Entity as EntityTrait>::Model,
    ) -> AppResult<Self::Output>;
}

/// Insert a root row and return its generated key.
async fn insert_root<A>(txn: &DatabaseTransaction, root: A) -> Result<i32, DbErr>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    let result = <A::Entity as EntityTrait>::insert(root).exec(txn).await?;
    Ok(result.last_insert_id)
}
