//! Role lookups.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use common::{AppError, AppResult};
use domain::Role;

use super::entities::role;

/// Resolve a live role name to its id.
///
/// Runs on whatever connection it is handed, so a writer can call it inside
/// its open transaction.
pub async fn resolve_role_id<C: ConnectionTrait>(db: &C, name: &str) -> AppResult<i32> {
    role::Entity::find()
        .select_only()
        .column(role::Column::Id)
        .filter(role::Column::Name.eq(name))
        .filter(role::Column::DeletedAt.is_null())
        .into_tuple::<i32>()
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Role '{}'", name)))
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// List live roles ordered by id
    async fn list(&self) -> AppResult<Vec<Role>>;
}

pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn list(&self) -> AppResult<Vec<Role>> {
        let models = role::Entity::find()
            .filter(role::Column::DeletedAt.is_null())
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Role::from).collect())
    }
}
