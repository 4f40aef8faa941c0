use std::sync::Arc;

use async_trait::async_trait;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenClaims;
use chrono::Duration;
use tokio::sync::OnceCell;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

// Verified on the unknown-email path so it costs the same Argon2 work as a wrong password.
const DUMMY_PASSWORD: &str = "sso-dummy-password";

/// Domain service implementation for authentication.
///
/// Stateless between calls; safe to share behind `Arc` across request handlers.
pub struct AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    app_provider: Arc<AP>,
    password_hasher: PasswordHasher,
    dummy_password_hash: OnceCell<String>,
    token_ttl: Duration,
}

impl<US, UP, AP> AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - User persistence implementation
    /// * `user_provider` - User lookup implementation
    /// * `app_provider` - Application lookup implementation
    /// * `token_ttl` - Lifetime of every token this service issues
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        app_provider: Arc<AP>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher: PasswordHasher::new(),
            dummy_password_hash: OnceCell::new(),
            token_ttl,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    // Argon2 is CPU bound; keep it off the async workers.
    async fn hash_password(&self, op: &'static str, password: String) -> Result<String, AuthError> {
        let hasher = self.password_hasher;

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::internal(op, e))?
            .map_err(|e| AuthError::internal(op, e))
    }

    async fn verify_password(
        &self,
        op: &'static str,
        password: String,
        password_hash: String,
    ) -> Result<bool, AuthError> {
        let hasher = self.password_hasher;

        tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| AuthError::internal(op, e))?
            .map_err(|e| AuthError::internal(op, e))
    }

    /// Burn one password verification against a hash no real user has.
    ///
    /// The dummy hash is computed on first use and reused afterwards. The outcome is
    /// discarded; only the elapsed time matters.
    async fn verify_dummy_password(&self, op: &'static str, password: String) {
        let dummy_hash = self
            .dummy_password_hash
            .get_or_try_init(|| self.hash_password(op, DUMMY_PASSWORD.to_string()))
            .await;

        match dummy_hash {
            Ok(dummy_hash) => {
                let _ = self.verify_password(op, password, dummy_hash.clone()).await;
            }
            Err(e) => {
                tracing::error!(op = op, error = %e, "Failed to generate dummy password hash");
            }
        }
    }
}

#[async_trait]
impl<US, UP, AP> AuthServicePort for AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        const OP: &str = "auth.login";

        if command.email.is_empty() || command.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        if command.app_id.is_empty() {
            return Err(AuthError::InvalidAppId);
        }

        let user = match self.user_provider.find_by_email(&command.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(op = OP, email = %command.email, "User not found");
                self.verify_dummy_password(OP, command.password).await;
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(op = OP, email = %command.email, error = %e, "Failed to get user");
                return Err(AuthError::internal(OP, e));
            }
        };

        let password_matches = self
            .verify_password(OP, command.password, user.password_hash.clone())
            .await
            .map_err(|e| {
                tracing::error!(op = OP, user_id = %user.id, error = %e, "Failed to verify password");
                e
            })?;

        if !password_matches {
            tracing::info!(op = OP, user_id = %user.id, "Invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        let app = match self.app_provider.find_by_id(command.app_id).await {
            Ok(Some(app)) => app,
            Ok(None) => {
                tracing::warn!(op = OP, app_id = %command.app_id, "App not found");
                return Err(AuthError::InvalidAppId);
            }
            Err(e) => {
                tracing::error!(op = OP, app_id = %command.app_id, error = %e, "Failed to get app");
                return Err(AuthError::internal(OP, e));
            }
        };

        let claims = TokenClaims::new(user.id.0, user.email, app.id.0, self.token_ttl);

        let token = JwtHandler::new(app.secret.as_bytes())
            .encode(&claims)
            .map_err(|e| {
                tracing::error!(op = OP, app_id = %app.id, error = %e, "Failed to generate token");
                AuthError::internal(OP, e)
            })?;

        tracing::info!(op = OP, user_id = %user.id, app_id = %app.id, "User logged in");

        Ok(token)
    }

    async fn register_new_user(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        const OP: &str = "auth.register_new_user";

        if command.email.is_empty() || command.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let password_hash = self
            .hash_password(OP, command.password)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, email = %command.email, error = %e, "Failed to generate password hash");
                e
            })?;

        match self.user_saver.save(&command.email, &password_hash).await {
            Ok(user_id) => {
                tracing::info!(op = OP, user_id = %user_id, "User registered");
                Ok(user_id)
            }
            Err(StorageError::UserAlreadyExists(_)) => {
                tracing::warn!(op = OP, email = %command.email, "User already exists");
                Err(AuthError::UserAlreadyExists)
            }
            Err(e) => {
                tracing::error!(op = OP, email = %command.email, error = %e, "Failed to save user");
                Err(AuthError::internal(OP, e))
            }
        }
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        const OP: &str = "auth.is_admin";

        if user_id.is_empty() {
            return Err(AuthError::InvalidUserId);
        }

        match self.user_provider.is_admin(user_id).await {
            Ok(Some(is_admin)) => {
                tracing::debug!(op = OP, user_id = %user_id, is_admin, "Checked admin flag");
                Ok(is_admin)
            }
            Ok(None) => {
                tracing::warn!(op = OP, user_id = %user_id, "User not found");
                Err(AuthError::InvalidUserId)
            }
            Err(e) => {
                tracing::error!(op = OP, user_id = %user_id, error = %e, "Failed to check user is admin");
                Err(AuthError::internal(OP, e))
            }
        }
    }
}
