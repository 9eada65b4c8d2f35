//! Domain error taxonomy shared by every layer.
//!
//! These are the failures domain logic itself can produce; HTTP- and
//! storage-specific errors live with the layers that raise them.

/// Errors from domain logic, independent of any transport.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A value failed a domain rule (unknown media type, bad search kind).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation would collide with existing state (taken username,
    /// registered email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller could not be authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
