//! Per-trainee progress book.
//!
//! Each trainee works on their own copy of a module's sub-module states,
//! taken from the catalog on first access. Advances are applied under the
//! book's write lock; prerequisite locks are refreshed in the same critical
//! section.

use std::collections::HashMap;
use std::sync::Arc;

use onboardpro_core::catalog::{CatalogProvider, Module, SubModule};
use onboardpro_core::error::CoreError;
use onboardpro_core::progress::{
    advance_sub_module_progress, overall_percent, refresh_locks, roadmap_percent, summarize,
    ProgressSummary,
};
use onboardpro_core::types::EntityId;
use serde::Serialize;
use tokio::sync::RwLock;

/// Result of a single progress advance.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressUpdate {
    pub sub_module: SubModule,
    /// Sibling sub-modules that became available because of this advance.
    pub unlocked: Vec<EntityId>,
    pub module_percent: u8,
}

/// A trainee's module overview: counts plus the rounded overall percentage.
#[derive(Debug, Clone, Serialize)]
pub struct TraineeProgress {
    pub summary: ProgressSummary,
    pub overall_percent: u8,
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone)]
struct ModuleTrack {
    sub_modules: Vec<SubModule>,
    advanced: bool,
}

type TrackKey = (EntityId, EntityId);

pub struct ProgressBook {
    catalog: Arc<dyn CatalogProvider>,
    tracks: RwLock<HashMap<TrackKey, ModuleTrack>>,
}

impl ProgressBook {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog,
            tracks: RwLock::new(HashMap::new()),
        }
    }

    /// The trainee's view of a module's sub-modules.
    pub async fn sub_modules(
        &self,
        user_id: &str,
        module_id: &str,
    ) -> Result<Vec<SubModule>, CoreError> {
        let key = (user_id.to_string(), module_id.to_string());
        if let Some(track) = self.tracks.read().await.get(&key) {
            return Ok(track.sub_modules.clone());
        }
        self.seed_track(key).await
    }

    pub async fn sub_module(
        &self,
        user_id: &str,
        module_id: &str,
        sub_module_id: &str,
    ) -> Result<SubModule, CoreError> {
        self.sub_modules(user_id, module_id)
            .await?
            .into_iter()
            .find(|s| s.id == sub_module_id)
            .ok_or_else(|| CoreError::not_found("SubModule", sub_module_id))
    }

    /// Advance one sub-module by `delta` points for a trainee.
    ///
    /// Completing a sub-module unlocks any sibling whose prerequisites are
    /// now all completed.
    pub async fn advance(
        &self,
        user_id: &str,
        module_id: &str,
        sub_module_id: &str,
        delta: i32,
    ) -> Result<ProgressUpdate, CoreError> {
        let key = (user_id.to_string(), module_id.to_string());
        // Make sure the track exists before taking the write lock.
        self.sub_modules(user_id, module_id).await?;

        let mut tracks = self.tracks.write().await;
        let track = tracks
            .get_mut(&key)
            .ok_or_else(|| CoreError::Internal("Progress track vanished".into()))?;

        let idx = track
            .sub_modules
            .iter()
            .position(|s| s.id == sub_module_id)
            .ok_or_else(|| CoreError::not_found("SubModule", sub_module_id))?;

        let next = advance_sub_module_progress(&track.sub_modules[idx], delta)?;
        track.sub_modules[idx] = next;
        track.advanced = true;
        let unlocked = refresh_locks(&mut track.sub_modules);
        let module_percent = roadmap_percent(&track.sub_modules);

        let sub_module = track.sub_modules[idx].clone();
        tracing::info!(
            user_id,
            module_id,
            sub_module_id,
            delta,
            progress = sub_module.progress,
            status = sub_module.status.as_str(),
            unlocked = unlocked.len(),
            "Sub-module progress advanced"
        );

        Ok(ProgressUpdate {
            sub_module,
            unlocked,
            module_percent,
        })
    }

    /// Catalog modules with this trainee's completion rates applied.
    ///
    /// A module keeps the catalog's rate until the trainee advances one of
    /// its sub-modules; from then on the rate is the roadmap percentage.
    pub async fn modules(&self, user_id: &str) -> Result<Vec<Module>, CoreError> {
        let mut modules = self.catalog.list_modules().await?;
        let tracks = self.tracks.read().await;
        for module in &mut modules {
            let key = (user_id.to_string(), module.id.clone());
            if let Some(track) = tracks.get(&key).filter(|t| t.advanced) {
                module.completion_rate = roadmap_percent(&track.sub_modules);
            }
        }
        Ok(modules)
    }

    pub async fn overview(&self, user_id: &str) -> Result<TraineeProgress, CoreError> {
        let modules = self.modules(user_id).await?;
        let summary = summarize(&modules);
        Ok(TraineeProgress {
            summary,
            overall_percent: overall_percent(&summary),
            modules,
        })
    }

    async fn seed_track(&self, key: TrackKey) -> Result<Vec<SubModule>, CoreError> {
        let mut sub_modules = self.catalog.list_sub_modules(&key.1).await?;
        refresh_locks(&mut sub_modules);

        let mut tracks = self.tracks.write().await;
        // Another request may have seeded the same track while we waited.
        let track = tracks.entry(key).or_insert(ModuleTrack {
            sub_modules,
            advanced: false,
        });
        Ok(track.sub_modules.clone())
    }
}
