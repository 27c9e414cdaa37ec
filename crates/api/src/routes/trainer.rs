use axum::routing::get;
use axum::Router;

use crate::handlers::trainer;
use crate::state::AppState;

/// Routes mounted at `/trainer`.
///
/// ```text
/// GET /trainees   -> list_trainees
/// GET /modules    -> list_modules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trainees", get(trainer::list_trainees))
        .route("/modules", get(trainer::list_modules))
}
