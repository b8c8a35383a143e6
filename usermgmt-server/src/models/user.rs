//! User model
//!
//! The only persisted entity. `id` is assigned by storage on insert and
//! never changes afterwards; `email` is unique across all users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Body of POST /users and PUT /users/{id}.
///
/// `name`, `email` and `age` must be present with the right JSON types.
/// Any `id` in the body is ignored on create and replaced by the path id
/// on update.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl UserInput {
    /// Build the record handed to storage, stamping it with `id`.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id: id.get(),
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// User identifier taken from a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    /// Parse a path segment. Anything that isn't a base-10 `i32` is rejected.
    ///
    /// ```
    /// use usermgmt_server::models::UserId;
    ///
    /// assert_eq!("42".parse::<UserId>().unwrap().get(), 42);
    /// assert!("abc".parse::<UserId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        s.parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
