//! Handlers for the `/auth` resource (login, refresh, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use onboardpro_core::error::CoreError;
use onboardpro_core::identity::Identity;
use onboardpro_store::models::session::CreateRefreshSession;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_body;
use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: Identity,
    /// Where the client should land after signing in.
    pub home: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. The email must match exactly.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_body(&input)?;

    let identity = match state.credentials.authenticate(&input.email, &input.password) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::info!(email = %input.email, "Login rejected");
            return Err(e.into());
        }
    };

    tracing::info!(user_id = %identity.id, role = %identity.role, "User logged in");
    let response = create_auth_response(&state, identity).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// refresh token is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = state
        .sessions
        .find_by_refresh_token_hash(&token_hash)
        .await
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    state.sessions.revoke(&session.id).await;

    let identity = state
        .credentials
        .find_by_id(&session.user_id)
        .cloned()
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = create_auth_response(&state, identity).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke every refresh session of the caller. Always 204, even without a
/// usable token: signing out cannot fail.
pub async fn logout(State(state): State<AppState>, user: Option<AuthUser>) -> StatusCode {
    if let Some(user) = user {
        let revoked = state.sessions.revoke_all_for_user(&user.identity.id).await;
        tracing::info!(user_id = %user.identity.id, revoked, "User logged out");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/me
pub async fn me(RequireAuth(user): RequireAuth) -> Json<DataResponse<Identity>> {
    Json(DataResponse {
        data: user.identity,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue an access token, register a refresh session, build the response.
async fn create_auth_response(state: &AppState, identity: Identity) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(&identity, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    state
        .sessions
        .create(CreateRefreshSession {
            user_id: identity.id.clone(),
            refresh_token_hash: refresh_hash,
            expires_at,
        })
        .await;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        home: identity.role.home_path(),
        user: identity,
    })
}
