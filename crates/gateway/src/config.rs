//! Gateway configuration.

use std::env;

use common::AppResult;
use placement_service_lib::config::PlacementServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database, token and transaction settings of the embedded service
    pub placement: PlacementServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            placement: PlacementServiceConfig::from_env(),
        }
    }

    /// Refuse to start with settings that cannot be served safely.
    pub fn validate(&self) -> AppResult<()> {
        self.placement.jwt.validate()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            placement: PlacementServiceConfig::default(),
        }
    }
}
