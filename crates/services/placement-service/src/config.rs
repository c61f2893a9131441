//! Placement service configuration.

use std::env;
use std::time::Duration;

use common::{DatabaseConfig, JwtConfig};

/// Upper bound on a single unit of work.
pub const DEFAULT_TRANSACTION_TIMEOUT_SECONDS: u64 = 30;

/// Placement service configuration.
#[derive(Debug, Clone)]
pub struct PlacementServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Token signing settings
    pub jwt: JwtConfig,
    /// Maximum duration of one transaction before it is rolled back
    pub transaction_timeout: Duration,
}

impl PlacementServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut database = DatabaseConfig::from_env();
        if let Ok(url) = env::var("PLACEMENT_SERVICE_DATABASE_URL") {
            database.url = url;
        }

        Self {
            database,
            jwt: JwtConfig::from_env(),
            transaction_timeout: Duration::from_secs(
                env::var("TRANSACTION_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TRANSACTION_TIMEOUT_SECONDS),
            ),
        }
    }
}

impl Default for PlacementServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            transaction_timeout: Duration::from_secs(DEFAULT_TRANSACTION_TIMEOUT_SECONDS),
        }
    }
}
