//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`members`] - member management (sequential ids, embedded payment history)
//! - [`expenses`] - expense records
//! - [`donations`] - donation records

pub mod donations;
pub mod expenses;
pub mod health;
pub mod members;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Merge every API router.
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(members::router())
        .merge(expenses::router())
        .merge(donations::router())
}
