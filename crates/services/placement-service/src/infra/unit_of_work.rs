//! Unit of Work pattern implementation.
//!
//! An aggregate write (root row, child rows, linked account) runs inside one
//! transaction: committed on success, rolled back on error or timeout, and
//! rolled back by drop when the calling future is cancelled.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, AccessMode, ActiveModelTrait, ActiveValue::Set, ColumnTrait,
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, EntityTrait,
    IsolationLevel, QueryFilter, QuerySelect, TransactionTrait,
};

use common::{is_unique_violation, AppError, AppResult};
use domain::{Password, ACCOUNT_STATUS_ACTIVE};

use crate::config::DEFAULT_TRANSACTION_TIMEOUT_SECONDS;
use crate::repository::entities::account;
use crate::repository::login_conflict;

/// Unit of Work trait for dependency injection.
///
/// Note: This trait is not mockable directly due to its generic method.
/// Services are tested against a real (SQLite) database instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Pool connection for reads outside a transaction
    fn connection(&self) -> &DatabaseConnection;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error or
    /// timeout; the closure's error is returned unchanged.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
            + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// The open transaction, for entity operations
    pub fn connection(&self) -> &'a DatabaseTransaction {
        self.txn
    }

    /// Get account repository for this transaction
    pub fn accounts(&self) -> TxAccountRepository<'a> {
        TxAccountRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    timeout: Duration,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            timeout: Duration::from_secs(DEFAULT_TRANSACTION_TIMEOUT_SECONDS),
        }
    }

    /// Override the transaction timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn execute_transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
            + Send,
        T: Send,
    {
        // SQLite serializes writers and rejects explicit isolation levels
        let (isolation, access) = match self.db.get_database_backend() {
            DbBackend::Sqlite => (None, None),
            _ => (
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            ),
        };

        let txn = self.db.begin_with_config(isolation, access).await?;

        let outcome = {
            let ctx = TransactionContext::new(&txn);
            match tokio::time::timeout(self.timeout, f(ctx)).await {
                Ok(result) => result,
                Err(_) => Err(AppError::timeout("Transaction")),
            }
        };

        match outcome {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
            + Send,
        T: Send,
    {
        self.execute_transaction(f).await
    }
}

/// Account to provision alongside an aggregate root.
#[derive(Debug)]
pub struct NewAccount {
    pub login_id: String,
    pub password: Password,
}

/// Transaction-aware account repository.
///
/// Login ids are unique across live and soft-deleted accounts, so the
/// availability check deliberately ignores `deleted_at`.
pub struct TxAccountRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxAccountRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Fail with a conflict when any account already uses the login id.
    pub async fn ensure_login_available(&self, login_id: &str) -> AppResult<()> {
        let existing = account::Entity::find()
            .select_only()
            .column(account::Column::Id)
            .filter(account::Column::LoginId.eq(login_id))
            .into_tuple::<i32>()
            .one(self.txn)
            .await?;

        match existing {
            Some(_) => Err(login_conflict(login_id)),
            None => Ok(()),
        }
    }

    /// Insert an active account linked to an aggregate root through `link`.
    pub async fn create(
        &self,
        new_account: NewAccount,
        role_id: i32,
        link: account::Column,
        owner_id: i32,
    ) -> AppResult<i32> {
        let now = Utc::now();
        let mut active = account::ActiveModel {
            login_id: Set(new_account.login_id.clone()),
            password_hash: Set(new_account.password.into_string()),
            role_id: Set(role_id),
            status: Set(ACCOUNT_STATUS_ACTIVE.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        active.set(link, Some(owner_id).into());

        match active.insert(self.txn).await {
            Ok(model) => Ok(model.id),
            // A concurrent creation won the race between the check and the insert
            Err(e) if is_unique_violation(&e) => Err(login_conflict(&new_account.login_id)),
            Err(e) => Err(AppError::from(e)),
        }
    }

    /// Soft delete the live account linked to an aggregate root.
    pub async fn soft_delete_linked(
        &self,
        link: account::Column,
        owner_id: i32,
        now: DateTime<Utc>,
    ) -> AppResult<u64> {
        let result = account::Entity::update_many()
            .col_expr(account::Column::DeletedAt, Expr::value(now))
            .col_expr(account::Column::UpdatedAt, Expr::value(now))
            .filter(link.eq(owner_id))
            .filter(account::Column::DeletedAt.is_null())
            .exec(self.txn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Permanently delete every account linked to an aggregate root.
    pub async fn hard_delete_linked(&self, link: account::Column, owner_id: i32) -> AppResult<u64> {
        let result = account::Entity::delete_many()
            .filter(link.eq(owner_id))
            .exec(self.txn)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
