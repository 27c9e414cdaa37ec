//! Trainer-only endpoints.
//!
//! All endpoints require the trainer role via [`RequireTrainer`].

use axum::extract::State;
use axum::Json;
use onboardpro_core::catalog::{Module, TraineeRosterEntry};

use crate::error::AppResult;
use crate::middleware::rbac::RequireTrainer;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trainer/trainees
pub async fn list_trainees(
    RequireTrainer(_user): RequireTrainer,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TraineeRosterEntry>>>> {
    let roster = state.catalog.trainee_roster().await?;
    Ok(Json(DataResponse { data: roster }))
}

/// GET /api/v1/trainer/modules
///
/// The catalog as seeded, independent of any trainee's progress.
pub async fn list_modules(
    RequireTrainer(_user): RequireTrainer,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Module>>>> {
    let modules = state.catalog.list_modules().await?;
    Ok(Json(DataResponse { data: modules }))
}
