//! usermgmt-server: HTTP service for a single users resource
//!
//! - `db`: connection pool and the `UserRepository` capability, with a
//!   Postgres adapter and an in-memory adapter
//! - `http`: axum handlers, JSON envelope, server runner
//! - `config`: database settings from the environment

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{DbError, MemoryUserRepo, PgUserRepo, UserRepository};
pub use http::{
    build_router, run_server, serve_with_shutdown, AppState, ServerConfig, ServerError,
};
pub use models::{User, UserId, UserInput};
