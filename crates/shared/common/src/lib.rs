//! Common utilities shared across the workspace crates.
//!
//! This crate provides:
//! - Unified error handling
//! - Configuration structures
//! - HTTP response envelopes and pagination

pub mod config;
pub mod error;
pub mod pagination;
pub mod response;

pub use config::*;
#[cfg(feature = "database")]
pub use error::is_unique_violation;
pub use error::{AppError, AppResult, OptionExt};
pub use pagination::{Paginated, PaginationMeta, PaginationParams};
pub use response::{ApiResponse, Created, NoContent};
