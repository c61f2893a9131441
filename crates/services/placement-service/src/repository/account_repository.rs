//! Account repository: read access used by authentication.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use common::{AppError, AppResult};
use domain::{Account, Role, LOGIN_ID_FIELD};

use super::entities::{account, role};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
///
/// All lookups exclude soft-deleted accounts and return the account's role.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find a live account by its login id
    async fn find_by_login_id(&self, login_id: &str) -> AppResult<Option<(Account, Role)>>;

    /// Find a live account by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<(Account, Role)>>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one(
        &self,
        condition: sea_orm::Condition,
    ) -> AppResult<Option<(Account, Role)>> {
        let found = account::Entity::find()
            .filter(condition)
            .filter(account::Column::DeletedAt.is_null())
            .find_also_related(role::Entity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(found.and_then(|(account, role)| {
            // An account whose role row is missing cannot be authorized
            role.map(|role| (Account::from(account), Role::from(role)))
        }))
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_login_id(&self, login_id: &str) -> AppResult<Option<(Account, Role)>> {
        self.find_one(sea_orm::Condition::all().add(account::Column::LoginId.eq(login_id)))
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<(Account, Role)>> {
        self.find_one(sea_orm::Condition::all().add(account::Column::Id.eq(id)))
            .await
    }
}

/// Conflict raised when a login id is already taken.
pub(crate) fn login_conflict(login_id: &str) -> AppError {
    AppError::conflict(format!("{} '{}'", LOGIN_ID_FIELD, login_id))
}
