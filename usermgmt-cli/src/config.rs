//! Environment loading

use std::path::PathBuf;

use tracing::{debug, info};

/// Result of looking for a `.env` file
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound,
    Failed(dotenvy::Error),
}

impl DotenvOutcome {
    /// Report the outcome. Call once tracing is initialised.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => info!("Loaded configuration from {}", path.display()),
            Self::NotFound => debug!("No .env file found, using environment variables only"),
            Self::Failed(e) => debug!("Failed to load .env: {}", e),
        }
    }
}

/// Load variables from `./.env` if it exists. Parent directories are not
/// searched.
///
/// dotenvy never overwrites variables that are already set, so the real
/// environment wins over the file. Runs before tracing is set up so that a
/// `RUST_LOG` in the file takes effect; the caller logs the outcome.
pub fn load_dotenv() -> DotenvOutcome {
    let path = PathBuf::from(".env");
    match dotenvy::from_path(&path) {
        Ok(()) => DotenvOutcome::Loaded(std::fs::canonicalize(&path).unwrap_or(path)),
        Err(e) if e.not_found() => DotenvOutcome::NotFound,
        Err(e) => DotenvOutcome::Failed(e),
    }
}
