//! Read projection: live roots, their live children and linked account.

use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use common::{AppResult, PaginationParams};
use domain::AccountResponse;

use super::descriptor::{ChildTable, RootTable};
use crate::repository::entities::{account, role};

/// Find a root that has not been soft deleted.
pub(crate) async fn find_live_root<C, E>(
    db: &C,
    table: &RootTable<E>,
    id: i32,
) -> AppResult<Option<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let model = E::find()
        .filter(table.id.eq(id))
        .filter(table.deleted_at.is_null())
        .one(db)
        .await?;
    Ok(model)
}

/// Live rows of one child group, in insertion order.
pub(crate) async fn live_children<E, T>(
    db: &DatabaseConnection,
    table: &ChildTable<E>,
    owner_id: i32,
) -> AppResult<Vec<T>>
where
    E: EntityTrait,
    T: From<E::Model>,
{
    let models = E::find()
        .filter(table.owner.eq(owner_id))
        .filter(table.deleted_at.is_null())
        .order_by_asc(table.id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(T::from).collect())
}

/// Public fields of the live account linked to a root, if any.
pub(crate) async fn linked_account(
    db: &DatabaseConnection,
    link: account::Column,
    owner_id: i32,
) -> AppResult<Option<AccountResponse>> {
    let found = account::Entity::find()
        .filter(link.eq(owner_id))
        .filter(account::Column::DeletedAt.is_null())
        .find_also_related(role::Entity)
        .one(db)
        .await?;

    Ok(found.map(|(account, role)| {
        let role = role.map(|r| r.name).unwrap_or_default();
        AccountResponse::new(account.into(), role)
    }))
}

/// One page of live roots plus the total number of live roots.
pub(crate) async fn list_live<E: EntityTrait>(
    db: &DatabaseConnection,
    table: &RootTable<E>,
    params: PaginationParams,
) -> AppResult<(Vec<E::Model>, u64)> {
    let total = E::find()
        .select_only()
        .column_as(Expr::col(table.id).count(), "count")
        .filter(table.deleted_at.is_null())
        .into_tuple::<i64>()
        .one(db)
        .await?
        .unwrap_or(0);

    let models = E::find()
        .filter(table.deleted_at.is_null())
        .order_by_asc(table.id)
        .offset(params.offset())
        .limit(params.limit())
        .all(db)
        .await?;

    Ok((models, total.max(0) as u64))
}
