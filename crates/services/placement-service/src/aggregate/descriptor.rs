//! Declarative table descriptors driving the generic aggregate writer.
//!
//! Each aggregate type declares one [`RootTable`] and one [`ChildTable`] per
//! child group as `static`s; the writer, the deletes and the read projection
//! only ever talk to tables through these.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter,
};

use crate::repository::entities::account;

/// Root table of an aggregate.
pub struct RootTable<E: EntityTrait> {
    /// Aggregate name, used in errors and logs
    pub name: &'static str,
    /// Role given to the aggregate's linked account
    pub role: &'static str,
    /// Column of `accounts` pointing back at this root
    pub account_link: account::Column,
    pub id: E::Column,
    pub updated_at: E::Column,
    pub deleted_at: E::Column,
    pub children: &'static [&'static dyn ChildGroup],
}

/// Child table owned by an aggregate root.
pub struct ChildTable<E: EntityTrait> {
    /// Group name, as it appears in payloads and responses
    pub group: &'static str,
    pub id: E::Column,
    /// Foreign key to the root
    pub owner: E::Column,
    pub updated_at: E::Column,
    pub deleted_at: E::Column,
    pub entity: PhantomData<E>,
}

/// Delete operations over one child group, independent of its row type.
#[async_trait]
pub trait ChildGroup: Send + Sync {
    /// Mark the owner's live rows deleted; returns the number of rows touched.
    async fn soft_delete(
        &self,
        txn: &DatabaseTransaction,
        owner_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr>;

    /// Remove every row of the owner, live or not.
    async fn hard_delete(&self, txn: &DatabaseTransaction, owner_id: i32) -> Result<u64, DbErr>;
}

#[async_trait]
impl<E: EntityTrait> ChildGroup for ChildTable<E> {
    async fn soft_delete(
        &self,
        txn: &DatabaseTransaction,
        owner_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = E::update_many()
            .col_expr(self.deleted_at, Expr::value(now))
            .col_expr(self.updated_at, Expr::value(now))
            .filter(self.owner.eq(owner_id))
            .filter(self.deleted_at.is_null())
            .exec(txn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn hard_delete(&self, txn: &DatabaseTransaction, owner_id: i32) -> Result<u64, DbErr> {
        let result = E::delete_many()
            .filter(self.owner.eq(owner_id))
            .exec(txn)
            .await?;
        Ok(result.rows_affected)
    }
}

/// Pending rows of one child group, inserted once the root id is known.
#[async_trait]
pub trait ChildBatch: Send {
    fn group(&self) -> &'static str;

    fn len(&self) -> usize;

    async fn insert_all(self: Box<Self>, txn: &DatabaseTransaction, owner_id: i32)
        -> Result<(), DbErr>;
}

struct ChildRows<A: ActiveModelTrait> {
    table: &'static ChildTable<A::Entity>,
    rows: Vec<A>,
}

#[async_trait]
impl<A> ChildBatch for ChildRows<A>
where
    A: ActiveModelTrait + Send + 'static,
{
    fn group(&self) -> &'static str {
        self.table.group
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    async fn insert_all(
        self: Box<Self>,
        txn: &DatabaseTransaction,
        owner_id: i32,
    ) -> Result<(), DbErr> {
        let ChildRows { table, rows } = *self;
        for mut row in rows {
            row.set(table.owner, owner_id.into());
            <A::Entity as EntityTrait>::insert(row).exec(txn).await?;
        }
        Ok(())
    }
}

/// A root row plus its child rows, ready to be written.
pub struct AggregateRows<R> {
    pub root: R,
    pub children: Vec<Box<dyn ChildBatch>>,
}

impl<R> AggregateRows<R> {
    pub fn new(root: R) -> Self {
        Self {
            root,
            children: Vec::new(),
        }
    }

    /// Attach the rows of one child group.
    pub fn with<A>(mut self, table: &'static ChildTable<A::Entity>, rows: Vec<A>) -> Self
    where
        A: ActiveModelTrait + Send + 'static,
    {
        self.children.push(Box::new(ChildRows { table, rows }));
        self
    }

    /// Row count per group, for logging
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        self.children
            .iter()
            .map(|batch| (batch.group(), batch.len()))
            .collect()
    }
}
