use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// PostgreSQL storage for users and applications.
///
/// Implements every storage port; the service receives the same instance three times.
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> StorageError {
    StorageError::Database(e.to_string())
}

#[async_trait]
impl UserSaver for PostgresStorage {
    async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return StorageError::UserAlreadyExists(email.to_string());
                }
            }
            database_error(e)
        })?;

        let id: i64 = row.try_get("id").map_err(database_error)?;

        Ok(UserId(id))
    }
}

#[async_trait]
impl UserProvider for PostgresStorage {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, pass_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(r) => Ok(Some(User {
                id: UserId(r.try_get("id").map_err(database_error)?),
                email: r.try_get("email").map_err(database_error)?,
                password_hash: r.try_get("pass_hash").map_err(database_error)?,
            })),
            None => Ok(None),
        }
    }

    async fn is_admin(&self, user_id: UserId) -> Result<Option<bool>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(|r| r.try_get("is_admin"))
            .transpose()
            .map_err(database_error)
    }
}

#[async_trait]
impl AppProvider for PostgresStorage {
    async fn find_by_id(&self, app_id: AppId) -> Result<Option<App>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(app_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(r) => Ok(Some(App {
                id: AppId(r.try_get("id").map_err(database_error)?),
                name: r.try_get("name").map_err(database_error)?,
                secret: r.try_get("secret").map_err(database_error)?,
            })),
            None => Ok(None),
        }
    }
}
