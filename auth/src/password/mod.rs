//! Password storage for the SSO service.
//!
//! Registration stores the output of [`PasswordHasher::hash`] and login checks a
//! submitted password with [`PasswordHasher::verify`].

pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
