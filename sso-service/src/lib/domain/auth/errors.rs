use thiserror::Error;

/// Error reported by storage adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for authentication operations.
///
/// The first four variants are stable domain outcomes meant to be matched by callers.
/// Everything else is `Internal` and must surface only as a generic failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid user id")]
    InvalidUserId,

    #[error("Invalid app id")]
    InvalidAppId,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("{op}: {message}")]
    Internal { op: &'static str, message: String },
}

impl AuthError {
    /// Wrap an unexpected failure with the operation it happened in.
    pub fn internal(op: &'static str, err: impl ToString) -> Self {
        AuthError::Internal {
            op,
            message: err.to_string(),
        }
    }
}
