//! Error types shared by the session state and the HTTP layer

use thiserror::Error;

/// Errors raised outside the (infallible) session transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    /// A phase duration was zero or too large to represent in seconds
    #[error("{field} must be positive and fit in seconds, got {value}")]
    InvalidDuration { field: &'static str, value: u64 },

    /// A blocked site entry was empty after trimming
    #[error("invalid site entry: {0:?}")]
    InvalidSite(String),

    /// A mutex guarding shared state was poisoned
    #[error("failed to lock {0}")]
    LockPoisoned(&'static str),
}

pub type Result<T> = std::result::Result<T, FocusError>;
