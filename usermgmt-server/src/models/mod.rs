//! Domain models
//!
//! Request input is bound to these types at the HTTP edge. Anything that
//! fails to bind is a ValidationError, never a panic.

pub mod user;
pub mod validation;

pub use user::{User, UserId, UserInput};
pub use validation::ValidationError;
