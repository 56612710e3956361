/**
 * Authentication Service
 *
 * This module composes storage, password hashing and token issuance into the
 * three operations the service exposes: login, register and the admin check.
 *
 * # Login
 *
 * 1. Look up the user by email (unknown email → `InvalidCredentials`)
 * 2. Verify the password (mismatch → `InvalidCredentials`)
 * 3. Look up the application (unknown id → `InvalidAppId`)
 * 4. Sign a token with the application's secret and the configured TTL
 *
 * # Register
 *
 * 1. Hash the password
 * 2. Save the user (duplicate email → `UserAlreadyExists`)
 *
 * # Is Admin
 *
 * 1. Read the admin flag (unknown id → `UserNotFound`)
 *
 * Every other failure becomes `AuthError::Internal`. Nothing is retried
 * here. Each error is logged once, where it is classified.
 */
use std::sync::Arc;
use std::time::Duration;

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::create_token;
use crate::backend::storage::{AppProvider, StorageError, UserProvider, UserSaver};

/// Authentication service
///
/// Holds no mutable state; share it behind an `Arc` across request tasks.
#[derive(Clone)]
pub struct AuthService {
    user_saver: Arc<dyn UserSaver>,
    user_provider: Arc<dyn UserProvider>,
    app_provider: Arc<dyn AppProvider>,
    hasher: PasswordHasher,
    token_ttl: Duration,
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_saver` - creates users
    /// * `user_provider` - reads users
    /// * `app_provider` - reads applications
    /// * `hasher` - password hasher with its cost already chosen
    /// * `token_ttl` - lifetime of every issued token
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        hasher: PasswordHasher,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            hasher,
            token_ttl,
        }
    }

    /// Authenticate a user and issue a token for `app_id`
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - unknown email or wrong password
    /// * `InvalidAppId` - unknown application
    /// * `Internal` - storage, hashing or signing failure
    #[tracing::instrument(name = "auth.login", skip_all, fields(op = "auth.login", app_id = app_id))]
    pub async fn login(&self, email: &str, password: &str, app_id: i64) -> Result<String, AuthError> {
        const OP: &str = "auth.login";

        tracing::info!("logging in user");

        let user = match self.user_provider.user(email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                self.hasher.verify_decoy_blocking(password.to_owned()).await;
                tracing::warn!("user not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to get user");
                return Err(AuthError::internal(OP, e));
            }
        };

        match self
            .hasher
            .verify_blocking(user.password_hash.clone(), password.to_owned())
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(user_id = user.id, "invalid credentials");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(user_id = user.id, error = %e, "failed to verify password");
                return Err(AuthError::internal(OP, e));
            }
        }

        let app = match self.app_provider.app(app_id).await {
            Ok(app) => app,
            Err(StorageError::AppNotFound) => {
                tracing::warn!("app not found");
                return Err(AuthError::InvalidAppId);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to get app");
                return Err(AuthError::internal(OP, e));
            }
        };

        let token = create_token(&user, &app, self.token_ttl).map_err(|e| {
            tracing::error!(user_id = user.id, error = %e, "failed to generate token");
            AuthError::internal(OP, e)
        })?;

        tracing::info!(user_id = user.id, "user logged in successfully");

        Ok(token)
    }

    /// Register a new user and return the assigned id
    ///
    /// # Errors
    ///
    /// * `UserAlreadyExists` - email already registered
    /// * `Internal` - hashing or storage failure
    #[tracing::instrument(name = "auth.register_user", skip_all, fields(op = "auth.register_user"))]
    pub async fn register_user(&self, email: &str, password: &str) -> Result<i64, AuthError> {
        const OP: &str = "auth.register_user";

        tracing::info!("registering user");

        let pass_hash = self
            .hasher
            .hash_blocking(password.to_owned())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to generate password hash");
                AuthError::internal(OP, e)
            })?;

        let id = match self.user_saver.save_user(email, &pass_hash).await {
            Ok(id) => id,
            Err(StorageError::UserExists) => {
                tracing::warn!("user already exists");
                return Err(AuthError::UserAlreadyExists);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save user");
                return Err(AuthError::internal(OP, e));
            }
        };

        tracing::info!(user_id = id, "user registered");

        Ok(id)
    }

    /// Report whether `user_id` is an administrator
    ///
    /// # Errors
    ///
    /// * `UserNotFound` - no such user
    /// * `Internal` - storage failure
    #[tracing::instrument(name = "auth.is_admin", skip(self), fields(op = "auth.is_admin"))]
    pub async fn is_admin(&self, user_id: i64) -> Result<bool, AuthError> {
        const OP: &str = "auth.is_admin";

        tracing::info!("checking if user is admin");

        let is_admin = match self.user_provider.is_admin(user_id).await {
            Ok(flag) => flag,
            Err(StorageError::UserNotFound) => {
                tracing::warn!("user not found");
                return Err(AuthError::UserNotFound);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read admin flag");
                return Err(AuthError::internal(OP, e));
            }
        };

        tracing::info!(is_admin, "checked if user is admin");

        Ok(is_admin)
    }
}
