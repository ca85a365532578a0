//! Error types for world construction and lookups.
//!
//! Only setup-time problems are errors. Anything that goes wrong during a
//! tick (missing shapes, unhandled shape pairs, degenerate contacts) is
//! skipped by the pipeline instead.

use thiserror::Error;

/// Result type alias for physics operations.
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Errors raised while building or querying a world.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// A constructor argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An object could not be brought into a usable state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// No camera is registered under the requested number.
    #[error("camera {0} does not exist")]
    CameraNotFound(u32),

    /// No object is registered under the requested id.
    #[error("object {0} does not exist")]
    ObjectNotFound(u64),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PhysicsError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }

    /// Create an invalid state error.
    #[must_use]
    pub fn invalid_state(details: impl Into<String>) -> Self {
        Self::InvalidState(details.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(details: impl Into<String>) -> Self {
        Self::Config(details.into())
    }
}

impl From<serde_json::Error> for PhysicsError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhysicsError::invalid_argument("scale must be positive");
        assert!(format!("{err}").contains("scale must be positive"));

        let err = PhysicsError::CameraNotFound(3);
        assert_eq!(format!("{err}"), "camera 3 does not exist");

        let err = PhysicsError::ObjectNotFound(42);
        assert!(format!("{err}").contains("42"));
    }

    #[test]
    fn test_from_json_error() {
        let bad: Result<u32, _> = serde_json::from_str("not json");
        let err: PhysicsError = bad.unwrap_err().into();
        assert!(matches!(err, PhysicsError::Config(_)));
    }
}
