//! Repository layer - entities and data access.

mod account_repository;
pub mod entities;
mod role_repository;

pub use account_repository::{AccountRepository, AccountStore};
pub(crate) use account_repository::login_conflict;
pub use role_repository::{resolve_role_id, RoleRepository, RoleStore};

#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
