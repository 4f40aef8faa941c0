use thiserror::Error;

/// Failure while storing or checking a user password.
///
/// A wrong password is not an error: `verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Argon2 could not produce a hash for a registering user.
    #[error("Could not hash password: {0}")]
    HashingFailed(String),

    /// The stored hash could not be used to check a login.
    #[error("Could not check password: {0}")]
    VerificationFailed(String),
}
