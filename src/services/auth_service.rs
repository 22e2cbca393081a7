//! Domain service for account registration, login and profile lookup.

use thiserror::Error;

use crate::db::UserStoreError;
use crate::models::User;
use crate::services::password::PasswordError;
use crate::services::registration::{RegistrationError, RegistrationRequest};
use crate::services::token::TokenError;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("{}", crate::constants::messages::MISSING_CREDENTIALS)]
    MissingCredentials,

    /// Unknown email and wrong password are deliberately the same error.
    #[error("{}", crate::constants::messages::INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<UserStoreError> for AuthError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateUsername => RegistrationError::DuplicateUsername.into(),
            UserStoreError::DuplicateEmail => RegistrationError::DuplicateEmail.into(),
            UserStoreError::Database(e) => e.into(),
        }
    }
}

/// A successful login: a fresh bearer token and who it belongs to.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Validates and stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Registration`] for any rejected field, including
    /// a username or email that is already taken.
    async fn register(&self, request: RegistrationRequest) -> Result<User, AuthError>;

    /// Checks an email and password pair and issues a token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] if either value is absent and
    /// [`AuthError::InvalidCredentials`] if they do not match a stored account.
    async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginResult, AuthError>;

    /// Gets the stored profile for a verified token subject.
    async fn get_profile(&self, user_id: &str) -> Result<User, AuthError>;
}
