//! Identity registry: creates users and checks their credentials.

use std::sync::Arc;

use tracing::{info, warn};

use nestor_core::error::AppError;
use nestor_database::store::UserStore;
use nestor_entity::user::{CreateUser, User};

use crate::password::{PasswordHasher, PasswordValidator};

/// Registers users and authenticates username/password pairs.
#[derive(Clone)]
pub struct IdentityRegistry {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl std::fmt::Debug for IdentityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityRegistry")
            .field("hasher", &self.hasher)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl IdentityRegistry {
    /// Creates a new identity registry.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Registers a new user.
    ///
    /// The username is compared exactly; `alice` and `Alice` are different
    /// users. A registration racing another for the same name is rejected by
    /// the store with the same `DuplicateUsername` error as the pre-check.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::incomplete_input());
        }
        self.validator.validate(password)?;

        if self.users.count_by_username(username).await? > 0 {
            return Err(AppError::duplicate_username(username));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .users
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Checks a username/password pair and returns the matching user.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::incomplete_input());
        }

        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Password verification failed");
            return Err(AppError::invalid_credentials());
        }

        Ok(user)
    }
}
