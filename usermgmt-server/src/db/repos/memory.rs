//! In-memory user repository
//!
//! Same contract as `PgUserRepo`: ids are assigned sequentially from 1,
//! email uniqueness is left to the caller, and update/delete of a missing
//! id succeed. Every call is recorded, and any operation can be made to
//! fail with a connection-style error.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{DbError, UserRepository};
use crate::models::{User, UserId};

/// Repository operation, used to select injected failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoOp {
    Create,
    FetchById,
    Update,
    Delete,
    ExistsById,
    ExistsByEmail,
}

/// A recorded call with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    Create(User),
    FetchById(UserId),
    Update(UserId, User),
    Delete(UserId),
    ExistsById(UserId),
    ExistsByEmail(String),
}

impl RepoCall {
    pub fn op(&self) -> RepoOp {
        match self {
            Self::Create(_) => RepoOp::Create,
            Self::FetchById(_) => RepoOp::FetchById,
            Self::Update(..) => RepoOp::Update,
            Self::Delete(_) => RepoOp::Delete,
            Self::ExistsById(_) => RepoOp::ExistsById,
            Self::ExistsByEmail(_) => RepoOp::ExistsByEmail,
        }
    }
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, User>,
    next_id: i32,
    calls: Vec<RepoCall>,
    failing: HashSet<RepoOp>,
}

/// In-memory repository. Clones share the same rows and call log.
#[derive(Clone, Default)]
pub struct MemoryUserRepo {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row directly, bypassing the call log. Keeps id assignment
    /// ahead of any seeded id.
    pub fn seed(&self, user: User) -> &Self {
        let mut inner = self.lock();
        inner.next_id = inner.next_id.max(user.id);
        inner.rows.insert(user.id, user);
        self
    }

    /// Make every later call to `op` fail.
    pub fn fail_on(&self, op: RepoOp) -> &Self {
        self.lock().failing.insert(op);
        self
    }

    /// Calls made so far, oldest first.
    pub fn calls(&self) -> Vec<RepoCall> {
        self.lock().calls.clone()
    }

    /// Whether any call to `op` was made.
    pub fn called(&self, op: RepoOp) -> bool {
        self.lock().calls.iter().any(|call| call.op() == op)
    }

    /// Current rows, ordered by id.
    pub fn users(&self) -> Vec<User> {
        self.lock().rows.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `call`, then fail if its operation is marked failing.
    fn begin(&self, call: RepoCall) -> Result<MutexGuard<'_, Inner>, DbError> {
        let mut inner = self.lock();
        let op = call.op();
        inner.calls.push(call);

        if inner.failing.contains(&op) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }

        Ok(inner)
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn create(&self, user: &User) -> Result<i32, DbError> {
        let mut inner = self.begin(RepoCall::Create(user.clone()))?;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            User {
                id,
                ..user.clone()
            },
        );
        Ok(id)
    }

    async fn fetch_by_id(&self, id: UserId) -> Result<User, DbError> {
        let inner = self.begin(RepoCall::FetchById(id))?;
        inner
            .rows
            .get(&id.get())
            .cloned()
            .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn update(&self, id: UserId, user: &User) -> Result<(), DbError> {
        let mut inner = self.begin(RepoCall::Update(id, user.clone()))?;
        if let Some(row) = inner.rows.get_mut(&id.get()) {
            row.name = user.name.clone();
            row.email = user.email.clone();
            row.age = user.age;
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), DbError> {
        let mut inner = self.begin(RepoCall::Delete(id))?;
        inner.rows.remove(&id.get());
        Ok(())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, DbError> {
        let inner = self.begin(RepoCall::ExistsById(id))?;
        Ok(inner.rows.contains_key(&id.get()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DbError> {
        let inner = self.begin(RepoCall::ExistsByEmail(email.to_owned()))?;
        Ok(inner.rows.values().any(|row| row.email == email))
    }
}
