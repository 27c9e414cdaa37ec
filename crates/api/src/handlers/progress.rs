//! Trainee progress endpoints.
//!
//! All endpoints require the trainee role via [`RequireTrainee`].

use axum::extract::{Path, State};
use axum::Json;
use onboardpro_store::progress::{ProgressUpdate, TraineeProgress};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireTrainee;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for advancing a section.
#[derive(Debug, Deserialize)]
pub struct AdvanceProgressRequest {
    /// Percentage points to add. Negative values are rejected.
    pub delta: i32,
}

/// POST /api/v1/trainee/modules/{id}/sections/{section_id}/progress
pub async fn advance_section(
    RequireTrainee(user): RequireTrainee,
    State(state): State<AppState>,
    Path((module_id, section_id)): Path<(String, String)>,
    Json(input): Json<AdvanceProgressRequest>,
) -> AppResult<Json<DataResponse<ProgressUpdate>>> {
    let update = state
        .progress
        .advance(&user.identity.id, &module_id, &section_id, input.delta)
        .await?;
    Ok(Json(DataResponse { data: update }))
}

/// GET /api/v1/trainee/progress
///
/// Module counts by state plus the overall completion percentage.
pub async fn get_progress(
    RequireTrainee(user): RequireTrainee,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TraineeProgress>>> {
    let overview = state.progress.overview(&user.identity.id).await?;
    Ok(Json(DataResponse { data: overview }))
}
