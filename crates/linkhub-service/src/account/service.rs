//! Account registration and credential login.

use std::sync::Arc;

use tracing::info;

use linkhub_auth::jwt::{JwtEncoder, SessionToken};
use linkhub_auth::password::{CredentialValidator, PasswordHasher};
use linkhub_core::error::AppError;
use linkhub_database::store::UserStore;
use linkhub_entity::user::{CreateUser, User};

/// The outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// A freshly issued session token.
    pub session: SessionToken,
}

/// Handles account creation and login.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User storage.
    user_store: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Credential policy.
    validator: Arc<CredentialValidator>,
    /// Session token issuer.
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<CredentialValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_store,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new user with a hashed password.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        self.validator.validate(username, password)?;

        if self.user_store.find_by_username(username).await?.is_some() {
            return Err(AppError::duplicate_username());
        }

        let password_hash = self.hasher.hash_password(password)?;
        let data = CreateUser {
            username: username.to_string(),
            password_hash,
        };

        // A concurrent registration can pass the lookup above.
        let user = self.user_store.create(&data).await.map_err(|e| {
            if e.is_conflict() {
                AppError::duplicate_username()
            } else {
                e
            }
        })?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(user) = self.user_store.find_by_username(username).await? else {
            self.hasher.verify_nothing(password);
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::invalid_credentials());
        }

        let session = self.encoder.issue(user.id)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult { user, session })
    }
}
