//! `SeaORM` implementation of the `AuthService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::Store;
use crate::models::{NewUser, User};
use crate::services::auth_service::{AuthError, AuthService, LoginResult};
use crate::services::password::PasswordHasher;
use crate::services::registration::{
    RegistrationError, RegistrationRequest, normalize_email, validate_registration,
};
use crate::services::token::TokenKeys;

pub struct SeaOrmAuthService {
    store: Store,
    hasher: PasswordHasher,
    tokens: Arc<TokenKeys>,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, hasher: PasswordHasher, tokens: Arc<TokenKeys>) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }
}

fn record_login(outcome: &'static str) {
    metrics::counter!("auth_logins_total", "outcome" => outcome).increment(1);
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(&self, request: RegistrationRequest) -> Result<User, AuthError> {
        let registration = validate_registration(request)?;

        // Fast path for the common case. Concurrent registrations that slip
        // past these checks are caught by the unique indexes on insert.
        if self.store.username_exists(&registration.username).await? {
            return Err(RegistrationError::DuplicateUsername.into());
        }

        if let Some(email) = &registration.email
            && self.store.email_exists(email).await?
        {
            return Err(RegistrationError::DuplicateEmail.into());
        }

        let password_hash = self.hasher.hash(&registration.password).await?;

        let user = self
            .store
            .create_user(NewUser {
                username: registration.username,
                phone: registration.phone,
                department: registration.department,
                email: registration.email,
                password_hash,
            })
            .await?;

        metrics::counter!("auth_registrations_total").increment(1);
        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginResult, AuthError> {
        let email = email.map(normalize_email).filter(|e| !e.is_empty());
        let password = password.filter(|p| !p.is_empty());

        let (Some(email), Some(password)) = (email, password) else {
            record_login("missing");
            return Err(AuthError::MissingCredentials);
        };

        let Some((user, password_hash)) =
            self.store.get_user_by_email_with_password(&email).await?
        else {
            record_login("rejected");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &password_hash).await? {
            record_login("rejected");
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        record_login("success");
        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult { token, user })
    }

    async fn get_profile(&self, user_id: &str) -> Result<User, AuthError> {
        self.store
            .get_user_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
