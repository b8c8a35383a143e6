//! HTTP server layer
//!
//! Axum server with:
//! - Uniform JSON envelope for every response
//! - Request tracing with latency
//! - Graceful shutdown with a bounded grace period

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use envelope::ApiResponse;
pub use error::ApiError;
pub use server::{
    build_router, run_server, serve_with_shutdown, AppState, ServerConfig, ServerError,
};
