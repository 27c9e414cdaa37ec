use axum::extract::State;
use axum::Json;
use onboardpro_core::leaderboard::LeaderboardEntry;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/leaderboard
///
/// Ranked highest score first; tied scores share a rank.
pub async fn get_leaderboard(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LeaderboardEntry>>>> {
    let entries = state.catalog.leaderboard().await?;
    Ok(Json(DataResponse { data: entries }))
}
