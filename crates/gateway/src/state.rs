//! Application state for dependency injection.

use placement_service_lib::infra::Database;
use placement_service_lib::Services;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub database: Database,
}

impl AppState {
    pub fn new(services: Services, database: Database) -> Self {
        Self { services, database }
    }
}
