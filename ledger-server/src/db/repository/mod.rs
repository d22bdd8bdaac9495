//! Repository Module
//!
//! The record service layer: per-entity CRUD over the document store, with
//! validation, normalization, and member id assignment. Handlers construct a
//! repository per request from the state's owned storage handle.

pub mod donation;
pub mod expense;
pub mod member;

// Re-exports
pub use donation::DonationRepository;
pub use expense::ExpenseRepository;
pub use member::MemberRepository;

use std::future::Future;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Upper bound on a single storage call. An elapsed timeout surfaces as
/// [`RepoError::Unavailable`] instead of the request hanging.
pub const STORAGE_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations and record collisions come back as plain
        // query errors; classify by message so callers see a conflict.
        if msg.contains("already contains") || msg.contains("already exists") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }

    /// Run a storage call under [`STORAGE_CALL_TIMEOUT`].
    pub async fn run<T>(&self, fut: impl Future<Output = RepoResult<T>>) -> RepoResult<T> {
        match tokio::time::timeout(STORAGE_CALL_TIMEOUT, fut).await {
            Ok(res) => res,
            Err(_) => Err(RepoError::Unavailable("storage call timed out".into())),
        }
    }
}
