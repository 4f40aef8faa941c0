use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::JwtError;

/// JWT token handler bound to a single application secret.
///
/// Uses HS256 (HMAC with SHA-256). A token verifies only under the secret it was
/// signed with, which is what ties a token to its issuing application.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    has_secret: bool,
}

impl JwtHandler {
    /// Create a new JWT handler with an application secret.
    ///
    /// # Arguments
    /// * `secret` - Secret of the application tokens are issued for
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            has_secret: !secret.is_empty(),
        }
    }

    /// Sign claims into a JWT token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Secret is empty or signing failed
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, JwtError> {
        if !self.has_secret {
            return Err(JwtError::EncodingFailed("empty signing secret".to_string()));
        }

        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a JWT token and return its claims.
    ///
    /// Rejects tokens with a mismatched signature, a signing algorithm other than
    /// HS256, or an `exp` in the past. No leeway is applied to expiry.
    ///
    /// # Arguments
    /// * `token` - JWT token string to verify
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidToken` - Any verification failure, without further detail
    pub fn decode(&self, token: &str) -> Result<TokenClaims, JwtError> {
        if !self.has_secret {
            return Err(JwtError::InvalidToken);
        }

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| JwtError::InvalidToken)
    }
}
