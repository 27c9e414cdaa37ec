use axum::routing::get;
use axum::Router;

use crate::handlers::{modules, quiz};
use crate::state::AppState;

/// Routes mounted at `/modules`. Any signed-in role.
///
/// ```text
/// GET /                               -> list_modules
/// GET /{id}                           -> get_module
/// GET /{id}/sections                  -> list_sections
/// GET /{id}/sections/{section_id}     -> get_section
/// GET /{id}/quiz                      -> get_quiz
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(modules::list_modules))
        .route("/{id}", get(modules::get_module))
        .route("/{id}/sections", get(modules::list_sections))
        .route("/{id}/sections/{section_id}", get(modules::get_section))
        .route("/{id}/quiz", get(quiz::get_quiz))
}
