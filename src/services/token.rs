//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the user's id, email and display name.
//! Verification is stateless: it depends only on the token, the clock and
//! the signing secret.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;
use crate::constants::auth::{BEARER_PREFIX, TOKEN_TTL_DAYS};
use crate::constants::messages::{ACCESS_DENIED, INVALID_TOKEN};
use crate::models::User;

/// Identity claims embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: String,
    pub email: Option<String>,
    pub name: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No usable `Authorization: Bearer <token>` header.
    #[error("{}", ACCESS_DENIED)]
    Missing,

    /// Bad signature, malformed token or wrong algorithm.
    #[error("{}", INVALID_TOKEN)]
    Invalid,

    #[error("{}", INVALID_TOKEN)]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Signing and verification keys derived from the server secret.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}

impl TokenKeys {
    /// Build keys from a secret. An empty secret is refused so that the
    /// service never starts with tokens it could not meaningfully sign.
    pub fn new(secret: &str) -> anyhow::Result<Self> {
        if secret.trim().is_empty() {
            anyhow::bail!("JWT secret must not be empty");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn from_config(config: &SecurityConfig) -> anyhow::Result<Self> {
        let secret = config
            .jwt_secret
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("JWT secret is not configured"))?;
        Self::new(secret)
    }

    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        self.issue_at(user, Utc::now())
    }

    /// Sign a token for `user` that expires exactly [`TOKEN_TTL_DAYS`] after `now`.
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, TokenError> {
        let expires = now + Duration::days(TOKEN_TTL_DAYS);

        let claims = TokenClaims {
            user_id: user.id.clone(),
            email: user.email.clone(),
            name: user.display_name().to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Check signature and expiry as of `now`. A token is expired from the
    /// second its `exp` is reached.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| {
                tracing::debug!("Token rejected: {e}");
                TokenError::Invalid
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

/// Pull the token out of an `Authorization` header value.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, TokenError> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .ok_or(TokenError::Missing)?;

    if token.is_empty() {
        return Err(TokenError::Missing);
    }

    Ok(token)
}
