pub mod auth;
pub mod health;
pub mod modules;
pub mod trainee;
pub mod trainer;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (never fails)
/// /auth/me                                         current identity
///
/// /navigate?path=                                  resolve a view or redirect (public)
/// /dashboard                                       role-specific dashboard
/// /leaderboard                                     ranked leaderboard
/// /profile                                         caller's profile
///
/// /modules                                         list
/// /modules/{id}                                    detail with sections
/// /modules/{id}/sections                           sections
/// /modules/{id}/sections/{section_id}              one section
/// /modules/{id}/quiz                               questions, no answer key
///
/// /trainee/progress                                summary (trainee)
/// /trainee/modules/{id}/sections/{sid}/progress    advance (POST, trainee)
/// /trainee/modules/{id}/quiz                       submit answers (POST, trainee)
///
/// /trainer/trainees                                roster (trainer)
/// /trainer/modules                                 catalog (trainer)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/navigate", get(handlers::navigation::resolve))
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/leaderboard", get(handlers::leaderboard::get_leaderboard))
        .route("/profile", get(handlers::profile::get_profile))
        .nest("/modules", modules::router())
        .nest("/trainee", trainee::router())
        .nest("/trainer", trainer::router())
}
