//! Role-specific dashboard payloads.

use axum::extract::State;
use axum::Json;
use onboardpro_core::catalog::{Module, TraineeRosterEntry};
use onboardpro_core::identity::Identity;
use onboardpro_core::leaderboard::LeaderboardEntry;
use onboardpro_core::progress::{mean_percent, ProgressSummary};
use onboardpro_core::roles::Role;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many leaderboard entries the trainee dashboard previews.
const TOP_PERFORMERS: usize = 3;

#[derive(Debug, Serialize)]
pub struct TraineeDashboard {
    pub user: Identity,
    pub summary: ProgressSummary,
    pub overall_percent: u8,
    pub modules: Vec<Module>,
    pub top_performers: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize)]
pub struct TrainerDashboard {
    pub user: Identity,
    pub active_trainees: usize,
    pub active_modules: usize,
    pub average_completion: u8,
    pub trainees: Vec<TraineeRosterEntry>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Dashboard {
    Trainer(TrainerDashboard),
    Trainee(TraineeDashboard),
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let identity = user.identity;
    let dashboard = match identity.role {
        Role::Trainee => Dashboard::Trainee(trainee_dashboard(&state, identity).await?),
        Role::Trainer => Dashboard::Trainer(trainer_dashboard(&state, identity).await?),
    };
    Ok(Json(DataResponse { data: dashboard }))
}

async fn trainee_dashboard(state: &AppState, user: Identity) -> AppResult<TraineeDashboard> {
    let (overview, leaderboard) = tokio::try_join!(
        state.progress.overview(&user.id),
        state.catalog.leaderboard()
    )?;

    Ok(TraineeDashboard {
        user,
        summary: overview.summary,
        overall_percent: overview.overall_percent,
        modules: overview.modules,
        top_performers: leaderboard.into_iter().take(TOP_PERFORMERS).collect(),
    })
}

async fn trainer_dashboard(state: &AppState, user: Identity) -> AppResult<TrainerDashboard> {
    let (modules, trainees) =
        tokio::try_join!(state.catalog.list_modules(), state.catalog.trainee_roster())?;

    Ok(TrainerDashboard {
        user,
        active_trainees: trainees.len(),
        active_modules: modules.len(),
        average_completion: mean_percent(trainees.iter().map(|t| t.progress_percent)),
        trainees,
    })
}
