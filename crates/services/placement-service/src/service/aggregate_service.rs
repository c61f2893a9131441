//! Aggregate use cases: create, read, list, update and delete.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use common::{AppError, AppResult, OptionExt, Paginated, PaginationParams};
use domain::Draft;

use crate::aggregate::{
    find_live_root, hard_delete, list_live, provision, soft_delete, write, AggregateKind,
};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Aggregate service trait for dependency injection, one instance per kind.
#[async_trait]
pub trait AggregateService<K: AggregateKind>: Send + Sync {
    /// Validate, provision credentials and write the whole aggregate
    async fn create(&self, draft: K::Draft) -> AppResult<K::Output>;

    /// Live root with live children and linked account
    async fn get(&self, id: i32) -> AppResult<K::Output>;

    /// Page of live roots
    async fn list(&self, params: PaginationParams) -> AppResult<Paginated<K::Summary>>;

    /// Update the root's own scalar fields
    async fn update(&self, id: i32, changes: K::Changes) -> AppResult<K::Output>;

    /// Soft delete the root, its children and its account
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Permanently delete the root, its children and its account
    async fn hard_delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AggregateService over a unit of work.
pub struct AggregateManager<K, U> {
    uow: Arc<U>,
    kind: PhantomData<fn() -> K>,
}

impl<K, U> AggregateManager<K, U>
where
    K: AggregateKind,
    U: UnitOfWork + 'static,
{
    pub fn new(uow: Arc<U>) -> Self {
        Self {
            uow,
            kind: PhantomData,
        }
    }
}

#[async_trait]
impl<K, U> AggregateService<K> for AggregateManager<K, U>
where
    K: AggregateKind,
    U: UnitOfWork + 'static,
{
    async fn create(&self, draft: K::Draft) -> AppResult<K::Output> {
        // Nothing touches storage until the whole payload is valid
        let credentials = draft.check()?;
        let account = match credentials {
            Some(credentials) => Some(provision(credentials).await?),
            None => None,
        };

        let rows = K::rows(draft, Utc::now())?;
        let id = write::<K, U>(&self.uow, rows, account).await?;

        self.get(id).await
    }

    async fn get(&self, id: i32) -> AppResult<K::Output> {
        let db = self.uow.connection();
        let table = K::table();

        let model = find_live_root(db, table, id)
            .await?
            .ok_or_not_found(table.name)?;

        K::project(db, model).await
    }

    async fn list(&self, params: PaginationParams) -> AppResult<Paginated<K::Summary>> {
        let (models, total) = list_live(self.uow.connection(), K::table(), params).await?;
        let items = models.into_iter().map(<K::Summary>::from).collect();

        Ok(Paginated::new(items, params, total))
    }

    async fn update(&self, id: i32, changes: K::Changes) -> AppResult<K::Output> {
        K::check_changes(&changes)?;
        let table = K::table();

        with_transaction!(self.uow, |ctx| {
            let txn = ctx.connection();
            let model = find_live_root(txn, table, id)
                .await?
                .ok_or_not_found(table.name)?;

            K::update_root(txn, K::apply(model, changes, Utc::now())).await?;
            Ok::<_, AppError>(())
        })?;

        self.get(id).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        soft_delete::<K, U>(&self.uow, id).await
    }

    async fn hard_delete(&self, id: i32) -> AppResult<()> {
        hard_delete::<K, U>(&self.uow, id).await
    }
}
