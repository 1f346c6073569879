//! Error types for the blur layout.
//!
//! Style resolution cannot fail; the only fallible operation is acquiring a
//! blur handle from the host when the component is attached.

use thiserror::Error;

/// Result type alias for blur layout operations.
pub type Result<T> = std::result::Result<T, BlurError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlurError {
    /// The host rendering root could not supply a blur handle, e.g. because
    /// the rendering surface is gone or cross-window blur is disabled.
    #[error("blur primitive unavailable: {reason}")]
    Unavailable { reason: String },
}

impl BlurError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        BlurError::Unavailable { reason: reason.into() }
    }
}
