//! Role-based access extractors.
//!
//! Each extractor wraps [`AuthUser`] and asks the access gate
//! ([`authorize`]) whether the caller may proceed. A denial becomes
//! [`AppError::Denied`], which carries the redirect target to the client.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use onboardpro_core::access::authorize;
use onboardpro_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn gate(
    parts: &mut Parts,
    state: &AppState,
    required_role: Option<Role>,
) -> Result<AuthUser, AppError> {
    let user = <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state).await?;
    authorize(Some(&user.identity), required_role).into_result()?;
    Ok(user)
}

/// Requires any signed-in caller.
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        gate(parts, state, None).await.map(RequireAuth)
    }
}

/// Requires the `trainer` role. Trainees are sent back to `/trainee`.
pub struct RequireTrainer(pub AuthUser);

impl FromRequestParts<AppState> for RequireTrainer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        gate(parts, state, Some(Role::Trainer))
            .await
            .map(RequireTrainer)
    }
}

/// Requires the `trainee` role. Trainers are sent back to `/trainer`.
pub struct RequireTrainee(pub AuthUser);

impl FromRequestParts<AppState> for RequireTrainee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        gate(parts, state, Some(Role::Trainee))
            .await
            .map(RequireTrainee)
    }
}
