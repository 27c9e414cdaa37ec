//! Catalog types: modules, their ordered sub-modules, and the provider trait
//! that supplies them.
//!
//! Every enum here is a closed tagged variant; untyped seed payloads are
//! converted into these types (and checked with [`Module::check`] /
//! [`SubModule::check`]) at the provider boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::leaderboard::LeaderboardEntry;
use crate::quiz::QuizQuestion;
use crate::types::{EntityId, PERCENT_MAX};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Video,
    #[serde(alias = "3d")]
    Interactive3d,
    Text,
}

/// Lifecycle of a sub-module.
///
/// ```text
/// locked --[prerequisites completed]--> not_started --[progress > 0]--> in_progress
///                                            \                              |
///                                             `--------[progress = 100]-----+--> completed
/// ```
///
/// `completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubModuleStatus {
    Locked,
    #[serde(alias = "not-started")]
    NotStarted,
    #[serde(alias = "in-progress")]
    InProgress,
    Completed,
}

impl SubModuleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// The status an unlocked sub-module has at the given progress.
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            0 => Self::NotStarted,
            p if p >= PERCENT_MAX => Self::Completed,
            _ => Self::InProgress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Link,
    Download,
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A prerequisite edge, resolved to a stable id. The title is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteRef {
    pub id: EntityId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub kind: ResourceKind,
    pub locator: String,
}

/// A top-level training unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub content_type: ContentType,
    pub duration_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub prerequisites: Vec<PrerequisiteRef>,
    pub skill_tags: Vec<String>,
    pub completion_rate: u8,
}

impl Module {
    pub fn check(&self) -> Result<(), CoreError> {
        if self.completion_rate > PERCENT_MAX {
            return Err(CoreError::Validation(format!(
                "Module '{}' completion rate {} is outside 0..=100",
                self.id, self.completion_rate
            )));
        }
        Ok(())
    }
}

/// An individual lesson inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubModule {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub content_type: ContentType,
    pub duration_label: String,
    pub status: SubModuleStatus,
    pub progress: u8,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub prerequisites: Vec<PrerequisiteRef>,
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_ref: Option<String>,
}

impl SubModule {
    /// Enforce the status/progress pairing:
    ///
    /// - `completed` iff progress is 100
    /// - `locked` and `not_started` imply progress 0
    /// - `in_progress` implies 0 < progress < 100
    pub fn check(&self) -> Result<(), CoreError> {
        if self.progress > PERCENT_MAX {
            return Err(CoreError::Validation(format!(
                "Sub-module '{}' progress {} is outside 0..=100",
                self.id, self.progress
            )));
        }

        let consistent = match self.status {
            SubModuleStatus::Locked => self.progress == 0,
            other => SubModuleStatus::for_progress(self.progress) == other,
        };
        if !consistent {
            return Err(CoreError::Validation(format!(
                "Sub-module '{}' has status {} with progress {}",
                self.id,
                self.status.as_str(),
                self.progress
            )));
        }
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.status == SubModuleStatus::Completed
    }

    pub fn is_locked(&self) -> bool {
        self.status == SubModuleStatus::Locked
    }
}

/// A trainee row in the trainer's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraineeRosterEntry {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub progress_percent: u8,
    pub completed_modules: u32,
    pub total_modules: u32,
    pub last_active: String,
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Source of catalog data.
///
/// Implementations are read-only and deterministic for a given dataset. The
/// core only depends on the result shapes, never on latency, so a network
/// backed implementation can replace the mock without touching callers.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn list_modules(&self) -> Result<Vec<Module>, CoreError>;

    /// Ordered sub-modules of a module. `NotFound` for an unknown module.
    async fn list_sub_modules(&self, module_id: &str) -> Result<Vec<SubModule>, CoreError>;

    async fn quiz_for(&self, module_id: &str) -> Result<Vec<QuizQuestion>, CoreError>;

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, CoreError>;

    async fn trainee_roster(&self) -> Result<Vec<TraineeRosterEntry>, CoreError>;

    async fn find_module(&self, module_id: &str) -> Result<Module, CoreError> {
        self.list_modules()
            .await?
            .into_iter()
            .find(|m| m.id == module_id)
            .ok_or_else(|| CoreError::not_found("Module", module_id))
    }

    async fn find_sub_module(
        &self,
        module_id: &str,
        sub_module_id: &str,
    ) -> Result<SubModule, CoreError> {
        self.list_sub_modules(module_id)
            .await?
            .into_iter()
            .find(|s| s.id == sub_module_id)
            .ok_or_else(|| CoreError::not_found("SubModule", sub_module_id))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{module, sub_module};
    use super::*;

    #[test]
    fn three_d_alias_parses_as_interactive() {
        let parsed: ContentType = serde_json::from_str("\"3d\"").unwrap();
        assert_eq!(parsed, ContentType::Interactive3d);
    }

    #[test]
    fn hyphenated_status_aliases_parse() {
        let parsed: SubModuleStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, SubModuleStatus::InProgress);
        let parsed: SubModuleStatus = serde_json::from_str("\"not-started\"").unwrap();
        assert_eq!(parsed, SubModuleStatus::NotStarted);
    }

    #[test]
    fn consistent_sub_modules_pass() {
        assert!(sub_module("1", SubModuleStatus::Completed, 100).check().is_ok());
        assert!(sub_module("2", SubModuleStatus::InProgress, 60).check().is_ok());
        assert!(sub_module("3", SubModuleStatus::Locked, 0).check().is_ok());
        assert!(sub_module("4", SubModuleStatus::NotStarted, 0).check().is_ok());
    }

    #[test]
    fn completed_requires_full_progress() {
        assert!(sub_module("1", SubModuleStatus::Completed, 80).check().is_err());
        assert!(sub_module("1", SubModuleStatus::InProgress, 100).check().is_err());
    }

    #[test]
    fn locked_with_progress_is_rejected() {
        assert!(sub_module("1", SubModuleStatus::Locked, 20).check().is_err());
    }

    #[test]
    fn progress_above_hundred_is_rejected() {
        assert!(sub_module("1", SubModuleStatus::Completed, 101).check().is_err());
        assert!(module("1", 101).check().is_err());
        assert!(module("1", 100).check().is_ok());
    }
}
