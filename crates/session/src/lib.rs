//! Client session handling for the quizzy learning client.
//!
//! This crate provides:
//! - `Session`: typed token and profile access over a key/value `Storage`
//! - `ApiConfig`: the backend base URL and endpoint joining
//! - `Guard`: the once-per-mount authentication check behind protected routes
//! - `Mount`: a liveness handle so late results never reach unmounted views
//!
//! Nothing here touches the browser directly; the frontend plugs in
//! `localStorage` and a real HTTP client through the `Storage` and
//! `ProfileVerifier` traits.

mod config;
mod guard;
mod mount;
mod store;

pub use config::{ApiConfig, DEFAULT_API_URL};
pub use guard::{AuthState, Guard, ProfileVerifier};
pub use mount::Mount;
pub use store::{MemoryStorage, PROFILE_KEY, Session, Storage, TOKEN_KEY};

use thiserror::Error;

/// Errors from session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
