//! Handlers for browsing modules and their sections (sub-modules).
//!
//! Trainees see their own progress; trainers see the catalog as seeded.

use axum::extract::{Path, State};
use axum::Json;
use onboardpro_core::catalog::{Module, SubModule};
use onboardpro_core::error::CoreError;
use onboardpro_core::identity::Identity;
use onboardpro_core::progress::roadmap_percent;
use onboardpro_core::roles::Role;
use onboardpro_core::types::EntityId;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ModuleDetail {
    #[serde(flatten)]
    pub module: Module,
    pub sub_modules: Vec<SubModule>,
    pub roadmap_percent: u8,
    pub has_quiz: bool,
}

#[derive(Debug, Serialize)]
pub struct SectionDetail {
    pub module_id: EntityId,
    pub module_title: String,
    pub sub_module: SubModule,
    pub previous_id: Option<EntityId>,
    pub next_id: Option<EntityId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/modules
pub async fn list_modules(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Module>>>> {
    let modules = modules_for(&state, &user.identity).await?;
    Ok(Json(DataResponse { data: modules }))
}

/// GET /api/v1/modules/{id}
pub async fn get_module(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> AppResult<Json<DataResponse<ModuleDetail>>> {
    let module = module_for(&state, &user.identity, &module_id).await?;
    let (sub_modules, quiz) = tokio::join!(
        sub_modules_for(&state, &user.identity, &module_id),
        state.catalog.quiz_for(&module_id)
    );
    let sub_modules = sub_modules?;
    let has_quiz = match quiz {
        Ok(_) => true,
        Err(CoreError::NotFound { .. }) => false,
        Err(e) => return Err(e.into()),
    };

    Ok(Json(DataResponse {
        data: ModuleDetail {
            roadmap_percent: roadmap_percent(&sub_modules),
            module,
            sub_modules,
            has_quiz,
        },
    }))
}

/// GET /api/v1/modules/{id}/sections
pub async fn list_sections(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<SubModule>>>> {
    let sub_modules = sub_modules_for(&state, &user.identity, &module_id).await?;
    Ok(Json(DataResponse { data: sub_modules }))
}

/// GET /api/v1/modules/{id}/sections/{section_id}
pub async fn get_section(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path((module_id, section_id)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<SectionDetail>>> {
    let module = module_for(&state, &user.identity, &module_id).await?;
    let sub_modules = sub_modules_for(&state, &user.identity, &module_id).await?;

    let idx = sub_modules
        .iter()
        .position(|s| s.id == section_id)
        .ok_or_else(|| CoreError::not_found("SubModule", &section_id))?;

    let previous_id = idx
        .checked_sub(1)
        .and_then(|i| sub_modules.get(i))
        .map(|s| s.id.clone());
    let next_id = sub_modules.get(idx + 1).map(|s| s.id.clone());

    Ok(Json(DataResponse {
        data: SectionDetail {
            module_id: module.id,
            module_title: module.title,
            sub_module: sub_modules[idx].clone(),
            previous_id,
            next_id,
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn modules_for(state: &AppState, identity: &Identity) -> AppResult<Vec<Module>> {
    let modules = match identity.role {
        Role::Trainee => state.progress.modules(&identity.id).await?,
        Role::Trainer => state.catalog.list_modules().await?,
    };
    Ok(modules)
}

async fn module_for(state: &AppState, identity: &Identity, module_id: &str) -> AppResult<Module> {
    modules_for(state, identity)
        .await?
        .into_iter()
        .find(|m| m.id == module_id)
        .ok_or_else(|| CoreError::not_found("Module", module_id).into())
}

async fn sub_modules_for(
    state: &AppState,
    identity: &Identity,
    module_id: &str,
) -> AppResult<Vec<SubModule>> {
    let sub_modules = match identity.role {
        Role::Trainee => state.progress.sub_modules(&identity.id, module_id).await?,
        Role::Trainer => state.catalog.list_sub_modules(module_id).await?,
    };
    Ok(sub_modules)
}
