use std::io;
use thiserror::Error;

/// Custom error type for hostsnap
#[derive(Error, Debug)]
pub enum SnapError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Name resolution failed: {0}")]
    Resolution(String),

    #[error("Battery query failed: {0}")]
    Battery(String),

    #[error("Host query failed: {0}")]
    Host(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for hostsnap
pub type Result<T> = std::result::Result<T, SnapError>;

impl SnapError {
    /// Create a permission denied error
    pub fn permission_denied<S: Into<String>>(msg: S) -> Self {
        SnapError::PermissionDenied(msg.into())
    }

    /// Create a name resolution error
    pub fn resolution<S: Into<String>>(msg: S) -> Self {
        SnapError::Resolution(msg.into())
    }

    /// Create a generic host query error
    pub fn host<S: Into<String>>(msg: S) -> Self {
        SnapError::Host(msg.into())
    }

    /// True for permission failures, including IO errors carrying that kind
    pub fn is_permission_denied(&self) -> bool {
        match self {
            SnapError::PermissionDenied(_) => true,
            SnapError::Io(e) => e.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}

impl From<battery::Error> for SnapError {
    fn from(err: battery::Error) -> Self {
        SnapError::Battery(err.to_string())
    }
}
