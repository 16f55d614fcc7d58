//! ws_io — File loading for the ward statistics CLI path.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - Strict offline posture: URL-looking paths are rejected up front.
//! - The engine itself never touches this crate; records, labels, templates,
//!   and indicators arrive in-memory at the `ws_algo`/`ws_report` boundary.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for ws_io (used by the loader module).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors.
    #[error("io/path error: {0}")]
    Read(String),

    /// JSON deserialization errors with an optional JSON-pointer-ish hint.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Domain validation of otherwise well-formed JSON (bad ward numbers,
    /// oversized files, URL paths).
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports line/column rather than a pointer; keep the
        // location in the message and default the pointer to root.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

/// Returns true if `s` looks like a URL (any `<scheme>://`, including
/// `file://`). Loading follows a strict offline posture; callers reject such
/// paths early with a clear message instead of a confusing open() failure.
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    s.trim().contains("://")
}

pub mod loader;

pub use loader::{load_indicators, load_labels, load_records, load_templates};
