//! The signed-in user's profile page.

use axum::extract::State;
use axum::Json;
use onboardpro_core::identity::Identity;
use onboardpro_core::progress::ProgressSummary;
use onboardpro_core::roles::Role;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileProgress {
    pub summary: ProgressSummary,
    pub overall_percent: u8,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub user: Identity,
    pub home: &'static str,
    /// Trainees only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProfileProgress>,
}

/// GET /api/v1/profile
pub async fn get_profile(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let identity = user.identity;

    let progress = match identity.role {
        Role::Trainee => {
            let overview = state.progress.overview(&identity.id).await?;
            Some(ProfileProgress {
                summary: overview.summary,
                overall_percent: overview.overall_percent,
            })
        }
        Role::Trainer => None,
    };

    Ok(Json(DataResponse {
        data: Profile {
            home: identity.role.home_path(),
            user: identity,
            progress,
        },
    }))
}
