//! Repository implementations for database access
//!
//! `UserRepository` is the storage capability the HTTP handlers depend on.
//! `PgUserRepo` talks to Postgres; `MemoryUserRepo` keeps rows in a map and
//! records every call, for tests and local runs without a database.

pub mod memory;
pub mod users;

use async_trait::async_trait;

use crate::models::{User, UserId};

pub use memory::{MemoryUserRepo, RepoCall, RepoOp};
pub use users::PgUserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn user_not_found(id: UserId) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }
}

/// Storage operations over the users table.
///
/// Each method maps to exactly one statement. `update` and `delete` succeed
/// even when no row matched, so callers check `exists_by_id` first.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, returning the id assigned by storage. `user.id` is ignored.
    async fn create(&self, user: &User) -> Result<i32, DbError>;

    /// Fetch a user. Returns `DbError::NotFound` when no row matches.
    async fn fetch_by_id(&self, id: UserId) -> Result<User, DbError>;

    /// Replace name, email and age of the user with `id`.
    async fn update(&self, id: UserId, user: &User) -> Result<(), DbError>;

    async fn delete(&self, id: UserId) -> Result<(), DbError>;

    async fn exists_by_id(&self, id: UserId) -> Result<bool, DbError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, DbError>;
}
