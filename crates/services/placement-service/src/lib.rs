//! Placement Service Library
//!
//! Transactional persistence of the placement CRM's aggregates (facilities,
//! placement executives, students) and login for their linked accounts. The
//! gateway embeds it in-process through [`Services`].

pub mod aggregate;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::aggregate::{FacilityKind, PlacementExecutiveKind, StudentKind};
use crate::config::PlacementServiceConfig;
use crate::infra::{Database, Persistence};
use crate::repository::{AccountStore, RoleRepository, RoleStore};
use crate::service::{AggregateManager, AggregateService, AuthService, Authenticator};

/// Every service the HTTP layer needs, wired to one database.
#[derive(Clone)]
pub struct Services {
    pub facilities: Arc<dyn AggregateService<FacilityKind>>,
    pub placement_executives: Arc<dyn AggregateService<PlacementExecutiveKind>>,
    pub students: Arc<dyn AggregateService<StudentKind>>,
    pub auth: Arc<dyn AuthService>,
    pub roles: Arc<dyn RoleRepository>,
}

impl Services {
    pub fn new(db: &Database, config: &PlacementServiceConfig) -> Self {
        let connection = db.get_connection();
        let uow = Arc::new(
            Persistence::new(connection.clone()).with_timeout(config.transaction_timeout),
        );
        let accounts = Arc::new(AccountStore::new(connection.clone()));

        Self {
            facilities: Arc::new(AggregateManager::<FacilityKind, _>::new(uow.clone())),
            placement_executives: Arc::new(AggregateManager::<PlacementExecutiveKind, _>::new(
                uow.clone(),
            )),
            students: Arc::new(AggregateManager::<StudentKind, _>::new(uow)),
            auth: Arc::new(Authenticator::new(accounts, config.jwt.clone())),
            roles: Arc::new(RoleStore::new(connection)),
        }
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = PlacementServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
