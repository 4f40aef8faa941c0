use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token for an application.
    ///
    /// # Arguments
    /// * `command` - Email, password and target application
    ///
    /// # Returns
    /// Signed token bound to the user and the application
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `InvalidAppId` - Application does not exist
    /// * `Internal` - Storage, hashing or signing failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Internal` - Storage or hashing failed
    async fn register_new_user(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Check whether a user has administrator privilege.
    ///
    /// # Errors
    /// * `InvalidUserId` - User does not exist
    /// * `Internal` - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persistence of new users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness of `email` must be enforced by storage at write time.
    ///
    /// # Arguments
    /// * `email` - Login email
    /// * `password_hash` - PHC password hash
    ///
    /// # Returns
    /// Identifier of the new user
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError>;
}

/// Read access to users.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Retrieve the administrator flag of a user.
    ///
    /// # Returns
    /// Optional flag (None if the user does not exist)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<Option<bool>, StorageError>;
}

/// Read access to registered applications.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Retrieve application by identifier.
    ///
    /// # Returns
    /// Optional application (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, app_id: AppId) -> Result<Option<App>, StorageError>;
}
