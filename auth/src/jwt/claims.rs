use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an application session token.
///
/// Binds a user to the application the token was issued for. The application binding
/// is enforced by the signing key; `app_id` is informational for the token holder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// User identifier
    pub uid: i64,

    /// User email at issuance
    pub email: String,

    /// Application the token was issued for
    pub app_id: i32,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims issued now and expiring after `ttl`.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email
    /// * `app_id` - Application identifier
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with `exp - iat` equal to `ttl` in whole seconds
    pub fn new(uid: i64, email: String, app_id: i32, ttl: Duration) -> Self {
        Self::issued_at(uid, email, app_id, ttl, Utc::now())
    }

    /// Create claims issued at an explicit instant.
    pub fn issued_at(
        uid: i64,
        email: String,
        app_id: i32,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let iat = issued_at.timestamp();

        Self {
            uid,
            email,
            app_id,
            iat,
            exp: iat + ttl.num_seconds(),
        }
    }

    /// Lifetime encoded in the token.
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
