//! Handler for resolving client-side navigation targets.

use axum::extract::Query;
use axum::Json;
use onboardpro_core::navigation::{navigate, Navigation};
use serde::Deserialize;

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub path: String,
}

/// GET /api/v1/navigate?path=...
///
/// Resolve a path for the caller: either the view to render or where to
/// redirect. Works signed out; a missing or stale token counts as signed out.
pub async fn resolve(
    user: Option<AuthUser>,
    Query(query): Query<NavigateQuery>,
) -> Json<DataResponse<Navigation>> {
    let identity = user.map(|u| u.identity);
    let outcome = navigate(identity.as_ref(), &query.path);
    tracing::debug!(path = %query.path, outcome = ?outcome, "Resolved navigation");
    Json(DataResponse { data: outcome })
}
