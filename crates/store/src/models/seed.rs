//! Raw seed records, shaped like the mock payloads the front-end was built
//! against (camelCase keys, prerequisite titles, `"3d"` content types).
//!
//! Nothing outside this crate sees these types: [`crate::seed`] validates
//! them and converts them into the typed domain values of `onboardpro_core`.

use onboardpro_core::catalog::{ContentType, Difficulty, ResourceKind, SubModuleStatus};
use onboardpro_core::roles::Role;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SeedDocument {
    #[validate(nested)]
    pub accounts: Vec<SeedAccount>,
    #[validate(nested)]
    pub modules: Vec<SeedModule>,
    #[serde(default)]
    #[validate(nested)]
    pub leaderboard: Vec<SeedLeaderboardEntry>,
    #[serde(default)]
    #[validate(nested)]
    pub trainees: Vec<SeedTrainee>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SeedAccount {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedModule {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[validate(range(max = 100))]
    pub completion_rate: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub sub_modules: Vec<SeedSubModule>,
    #[serde(default)]
    #[validate(nested)]
    pub quiz: Vec<SeedQuestion>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedSubModule {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub duration: String,
    pub status: SubModuleStatus,
    #[validate(range(max = 100))]
    pub progress: u32,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub resources: Vec<SeedResource>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SeedResource {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[validate(length(min = 1))]
    pub url: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 2))]
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedLeaderboardEntry {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub score: u32,
    #[validate(range(max = 100))]
    pub progress: u32,
    pub completed_modules: u32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedTrainee {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub avatar: String,
    #[validate(range(max = 100))]
    pub progress: u32,
    pub completed_modules: u32,
    pub total_modules: u32,
    pub last_active: String,
}
