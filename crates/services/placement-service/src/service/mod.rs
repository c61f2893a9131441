//! Placement service business logic.

mod aggregate_service;
mod auth_service;

pub use aggregate_service::{AggregateManager, AggregateService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
