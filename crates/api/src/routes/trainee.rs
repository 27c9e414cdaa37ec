//! Route definitions for trainee-only actions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{progress, quiz};
use crate::state::AppState;

/// Routes mounted at `/trainee`.
///
/// ```text
/// GET  /progress                                      -> get_progress
/// POST /modules/{id}/sections/{section_id}/progress   -> advance_section
/// POST /modules/{id}/quiz                             -> submit_quiz
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress", get(progress::get_progress))
        .route(
            "/modules/{id}/sections/{section_id}/progress",
            post(progress::advance_section),
        )
        .route("/modules/{id}/quiz", post(quiz::submit_quiz))
}
