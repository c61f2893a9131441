//! Generic aggregate writer and deletes.
//!
//! Every step runs on the transaction of one unit of work, so a failure at
//! any point leaves no root, child or account row behind.

use chrono::Utc;
use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter};
use tracing::{info, warn};

use common::{AppError, AppResult};

use super::descriptor::AggregateRows;
use super::AggregateKind;
use crate::infra::{NewAccount, UnitOfWork};
use crate::repository::resolve_role_id;
use crate::with_transaction;

/// Persist a root, its account and its children; returns the root id.
pub(crate) async fn write<K, U>(
    uow: &U,
    rows: AggregateRows<K::Root>,
    account: Option<NewAccount>,
) -> AppResult<i32>
where
    K: AggregateKind,
    U: UnitOfWork + 'static,
{
    let table = K::table();
    let counts = rows.counts();

    let result = with_transaction!(uow, |ctx| {
        if let Some(account) = &account {
            ctx.accounts()
                .ensure_login_available(&account.login_id)
                .await?;
        }

        let AggregateRows { root, children } = rows;
        let id = K::insert_root(ctx.connection(), root).await?;

        if let Some(account) = account {
            let role_id = resolve_role_id(ctx.connection(), table.role).await?;
            ctx.accounts()
                .create(account, role_id, table.account_link, id)
                .await?;
        }

        for batch in children {
            batch.insert_all(ctx.connection(), id).await?;
        }

        Ok::<_, AppError>(id)
    });

    match &result {
        Ok(id) => info!(aggregate = table.name, id, children = ?counts, "Aggregate created"),
        Err(e) => warn!(aggregate = table.name, error = ?e, "Aggregate create rolled back"),
    }
    result
}

/// Soft delete a live root together with its children and linked account.
pub(crate) async fn soft_delete<K, U>(uow: &U, id: i32) -> AppResult<()>
where
    K: AggregateKind,
    U: UnitOfWork + 'static,
{
    let table = K::table();

    let result = with_transaction!(uow, |ctx| {
        let now = Utc::now();
        let txn = ctx.connection();

        let root = <K::Entity as EntityTrait>::update_many()
            .col_expr(table.deleted_at, Expr::value(now))
            .col_expr(table.updated_at, Expr::value(now))
            .filter(table.id.eq(id))
            .filter(table.deleted_at.is_null())
            .exec(txn)
            .await?;
        if root.rows_affected == 0 {
            return Err(AppError::not_found(table.name));
        }

        for group in table.children {
            group.soft_delete(txn, id, now).await?;
        }
        ctx.accounts()
            .soft_delete_linked(table.account_link, id, now)
            .await?;

        Ok::<_, AppError>(())
    });

    match &result {
        Ok(()) => info!(aggregate = table.name, id, "Aggregate soft deleted"),
        Err(e) => warn!(aggregate = table.name, id, error = ?e, "Aggregate delete rolled back"),
    }
    result
}

/// Permanently remove a root, soft deleted or not, with everything it owns.
pub(crate) async fn hard_delete<K, U>(uow: &U, id: i32) -> AppResult<()>
where
    K: AggregateKind,
    U: UnitOfWork + 'static,
{
    let table = K::table();

    let result = with_transaction!(uow, |ctx| {
        let txn = ctx.connection();

        // Dependents first: every foreign key to the root restricts deletes
        for group in table.children {
            group.hard_delete(txn, id).await?;
        }
        ctx.accounts()
            .hard_delete_linked(table.account_link, id)
            .await?;

        let root = <K::Entity as EntityTrait>::delete_many()
            .filter(table.id.eq(id))
            .exec(txn)
            .await?;
        if root.rows_affected == 0 {
            return Err(AppError::not_found(table.name));
        }

        Ok::<_, AppError>(())
    });

    match &result {
        Ok(()) => info!(aggregate = table.name, id, "Aggregate permanently deleted"),
        Err(e) => warn!(
            aggregate = table.name,
            id,
            error = ?e,
            "Aggregate permanent delete rolled back"
        ),
    }
    result
}
