use thiserror::Error;

/// Failures surfaced by the resource client and the page controllers.
///
/// Every variant renders to a single display string; the page controllers
/// never let one propagate past the error reporter.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure before any response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response on a list call. `message` is the server body's
    /// `message` field surfaced verbatim when present, else a generic
    /// status line.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Create or update rejected; the string is already display-ready
    /// (server-supplied message or the generic per-resource fallback).
    #[error("{0}")]
    Save(String),

    /// Delete rejected; same message rule as [`ApiError::Save`].
    #[error("{0}")]
    Delete(String),

    /// Client-side rule failure. Never reaches the network.
    #[error("{0}")]
    Validation(String),
}
