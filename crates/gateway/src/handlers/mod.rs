//! HTTP request handlers.

pub mod auth_handler;
pub mod facility_handler;
pub mod health_handler;
pub mod placement_executive_handler;
pub mod role_handler;
pub mod student_handler;

pub use auth_handler::{account_routes, auth_routes};
pub use facility_handler::facility_routes;
pub use health_handler::health_routes;
pub use placement_executive_handler::placement_executive_routes;
pub use role_handler::role_routes;
pub use student_handler::student_routes;
