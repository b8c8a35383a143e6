//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One SQL statement per repository operation
//! - Existence and email uniqueness are checked by the caller, not by
//!   parsing constraint violations
//! - No transactions: check-then-act is two round trips

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, PoolConfig};
pub use repos::*;
