//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the SSO service:
//! - Password hashing (Argon2id)
//! - Per-application JWT minting and verification
//!
//! Tokens are signed with the secret of the application they are issued for, so a
//! handler is built per application rather than once per process.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Application Tokens
//! ```
//! use auth::{JwtHandler, TokenClaims};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"application-secret");
//! let claims = TokenClaims::new(42, "alice@example.com".to_string(), 1, Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.uid, 42);
//! assert_eq!(decoded.app_id, 1);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
