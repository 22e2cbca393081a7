use axum::{
    Json,
    extract::{FromRequestParts, State, rejection::JsonRejection},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, LoginResponse, LoginUser, MessageResponse, ProfileResponse};
use crate::constants::messages::{LOGGED_IN, PROFILE_FETCHED, REGISTERED};
use crate::services::registration::RegistrationRequest;
use crate::services::token::{TokenClaims, extract_bearer};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Extractor
// ============================================================================

/// Claims of a caller that presented a valid `Authorization: Bearer` token.
///
/// Missing or non-bearer headers reject with 401; a token that fails
/// verification rejects with 403.
#[derive(Debug, Clone)]
pub struct Authenticated(pub TokenClaims);

impl FromRequestParts<Arc<AppState>> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = extract_bearer(header)?;
        let claims = state.tokens.verify(token)?;

        tracing::Span::current().record("user_id", claims.user_id.as_str());
        Ok(Self(claims))
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload?;

    state.auth_service.register(request).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(REGISTERED))))
}

/// POST /api/login
/// Exchange email and password for a bearer token
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;

    let result = state
        .auth_service
        .login(request.email.as_deref(), request.password.as_deref())
        .await?;

    Ok(Json(LoginResponse {
        message: LOGGED_IN.to_string(),
        user: LoginUser::from(&result.user),
        token: result.token,
    }))
}

/// GET /api/myprofile
pub async fn my_profile(
    State(state): State<Arc<AppState>>,
    Authenticated(claims): Authenticated,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state.auth_service.get_profile(&claims.user_id).await?;

    Ok(Json(ProfileResponse {
        message: PROFILE_FETCHED.to_string(),
        user,
    }))
}
