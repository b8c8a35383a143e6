//! Route modules
//!
//! - users: CRUD over the users resource

pub mod users;
