use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Duration;
use sso_service::domain::auth::errors::StorageError;
use sso_service::domain::auth::models::App;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::models::User;
use sso_service::domain::auth::models::UserId;
use sso_service::domain::auth::ports::AppProvider;
use sso_service::domain::auth::ports::UserProvider;
use sso_service::domain::auth::ports::UserSaver;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test-secret";
pub const OTHER_APP_ID: i32 = 2;
pub const OTHER_APP_SECRET: &str = "other-secret";

pub type TestAuthService = AuthService<InMemoryStorage, InMemoryStorage, InMemoryStorage>;

/// In-memory storage enforcing email uniqueness at write time
#[derive(Default)]
pub struct InMemoryStorage {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    last_user_id: i64,
    users: HashMap<String, StoredUser>,
    apps: HashMap<i32, App>,
}

struct StoredUser {
    user: User,
    is_admin: bool,
}

impl InMemoryStorage {
    pub fn with_app(self, id: i32, name: &str, secret: &str) -> Self {
        self.state.lock().unwrap().apps.insert(
            id,
            App {
                id: AppId(id),
                name: name.to_string(),
                secret: secret.to_string(),
            },
        );
        self
    }

    pub fn grant_admin(&self, user_id: UserId) {
        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state.users.values_mut().find(|s| s.user.id == user_id) {
            stored.is_admin = true;
        }
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserSaver for InMemoryStorage {
    async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError> {
        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(email) {
            return Err(StorageError::UserAlreadyExists(email.to_string()));
        }

        state.last_user_id += 1;
        let id = UserId(state.last_user_id);
        state.users.insert(
            email.to_string(),
            StoredUser {
                user: User {
                    id,
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                },
                is_admin: false,
            },
        );

        Ok(id)
    }
}

#[async_trait]
impl UserProvider for InMemoryStorage {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.get(email).map(|s| s.user.clone()))
    }

    async fn is_admin(&self, user_id: UserId) -> Result<Option<bool>, StorageError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .values()
            .find(|s| s.user.id == user_id)
            .map(|s| s.is_admin))
    }
}

#[async_trait]
impl AppProvider for InMemoryStorage {
    async fn find_by_id(&self, app_id: AppId) -> Result<Option<App>, StorageError> {
        let state = self.state.lock().unwrap();
        Ok(state.apps.get(&app_id.0).cloned())
    }
}

/// Storage whose user reads and writes never complete, standing in for a hung database
#[derive(Default)]
pub struct StalledStorage {
    pub inner: InMemoryStorage,
}

#[async_trait]
impl UserSaver for StalledStorage {
    async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError> {
        std::future::pending::<()>().await;
        self.inner.save(email, password_hash).await
    }
}

#[async_trait]
impl UserProvider for StalledStorage {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        std::future::pending::<()>().await;
        self.inner.find_by_email(email).await
    }

    async fn is_admin(&self, user_id: UserId) -> Result<Option<bool>, StorageError> {
        self.inner.is_admin(user_id).await
    }
}

#[async_trait]
impl AppProvider for StalledStorage {
    async fn find_by_id(&self, app_id: AppId) -> Result<Option<App>, StorageError> {
        self.inner.find_by_id(app_id).await
    }
}

/// Auth service wired to in-memory storage with two pre-seeded applications
pub struct TestApp {
    pub storage: Arc<InMemoryStorage>,
    pub service: Arc<TestAuthService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_token_ttl(Duration::hours(1))
    }

    pub fn with_token_ttl(token_ttl: Duration) -> Self {
        let storage = Arc::new(
            InMemoryStorage::default()
                .with_app(APP_ID, "test", APP_SECRET)
                .with_app(OTHER_APP_ID, "other", OTHER_APP_SECRET),
        );

        let service = Arc::new(AuthService::new(
            Arc::clone(&storage),
            Arc::clone(&storage),
            Arc::clone(&storage),
            token_ttl,
        ));

        Self { storage, service }
    }

    pub fn grpc(&self) -> AuthGrpcService<TestAuthService> {
        AuthGrpcService::new(Arc::clone(&self.service))
    }
}
