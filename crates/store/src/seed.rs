//! Validated, typed dataset behind the mock collaborators.
//!
//! [`Dataset::parse`] is the catalog boundary: shape checks (`validator`),
//! status/progress consistency, quiz well-formedness, and resolution of
//! prerequisite titles to stable ids all happen here. A document that fails
//! any of them is rejected as a whole.

use std::collections::{HashMap, HashSet};

use onboardpro_core::catalog::{Module, PrerequisiteRef, Resource, SubModule, TraineeRosterEntry};
use onboardpro_core::error::CoreError;
use onboardpro_core::identity::Identity;
use onboardpro_core::leaderboard::{rank_entries, LeaderboardEntry};
use onboardpro_core::progress::{prerequisites_satisfied, roadmap_percent};
use onboardpro_core::quiz::{validate_quiz, QuizQuestion};
use onboardpro_core::types::EntityId;
use validator::Validate;

use crate::models::seed::{SeedDocument, SeedModule, SeedSubModule};

/// The dataset compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// A demo account: identity plus its plaintext seed password.
#[derive(Debug, Clone)]
pub struct SeedAccountRecord {
    pub identity: Identity,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub accounts: Vec<SeedAccountRecord>,
    pub modules: Vec<Module>,
    pub sub_modules: HashMap<EntityId, Vec<SubModule>>,
    pub quizzes: HashMap<EntityId, Vec<QuizQuestion>>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub roster: Vec<TraineeRosterEntry>,
}

impl Dataset {
    pub fn builtin() -> Result<Self, CoreError> {
        Self::parse(BUILTIN_CATALOG)
    }

    pub fn parse(json: &str) -> Result<Self, CoreError> {
        let doc: SeedDocument = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Malformed catalog document: {e}")))?;
        doc.validate()
            .map_err(|e| CoreError::Validation(format!("Invalid catalog document: {e}")))?;

        ensure_unique(doc.modules.iter().map(|m| m.id.as_str()), "module")?;
        ensure_unique(doc.accounts.iter().map(|a| a.email.as_str()), "account email")?;

        let module_titles: Vec<(&str, &str)> = doc
            .modules
            .iter()
            .map(|m| (m.id.as_str(), m.title.as_str()))
            .collect();

        let mut modules = Vec::with_capacity(doc.modules.len());
        let mut sub_modules = HashMap::new();
        let mut quizzes = HashMap::new();

        for seed in &doc.modules {
            let module = convert_module(seed, &module_titles)?;
            let subs = convert_sub_modules(seed)?;

            if !subs.is_empty() && module.completion_rate != roadmap_percent(&subs) {
                return Err(CoreError::Validation(format!(
                    "Module '{}' reports {}% but its sub-modules average {}%",
                    module.id,
                    module.completion_rate,
                    roadmap_percent(&subs)
                )));
            }

            if !seed.quiz.is_empty() {
                let quiz: Vec<QuizQuestion> = seed
                    .quiz
                    .iter()
                    .map(|q| QuizQuestion {
                        prompt: q.question.clone(),
                        options: q.options.clone(),
                        correct_option_index: q.correct_answer,
                    })
                    .collect();
                validate_quiz(&quiz)?;
                quizzes.insert(module.id.clone(), quiz);
            }

            sub_modules.insert(module.id.clone(), subs);
            modules.push(module);
        }

        let accounts = doc
            .accounts
            .into_iter()
            .map(|a| SeedAccountRecord {
                identity: Identity {
                    id: a.id,
                    name: a.name,
                    email: a.email,
                    role: a.role,
                    avatar: a.avatar,
                },
                password: a.password,
            })
            .collect();

        let leaderboard = rank_entries(
            doc.leaderboard
                .into_iter()
                .map(|e| LeaderboardEntry {
                    id: e.id,
                    name: e.name,
                    avatar: e.avatar,
                    score: e.score,
                    rank: 0,
                    progress_percent: e.progress as u8,
                    completed_module_count: e.completed_modules,
                })
                .collect(),
        );

        let roster = doc
            .trainees
            .into_iter()
            .map(|t| TraineeRosterEntry {
                id: t.id,
                name: t.name,
                email: t.email,
                avatar: t.avatar,
                progress_percent: t.progress as u8,
                completed_modules: t.completed_modules,
                total_modules: t.total_modules,
                last_active: t.last_active,
            })
            .collect();

        Ok(Self {
            accounts,
            modules,
            sub_modules,
            quizzes,
            leaderboard,
            roster,
        })
    }
}

fn convert_module(seed: &SeedModule, titles: &[(&str, &str)]) -> Result<Module, CoreError> {
    let module = Module {
        id: seed.id.clone(),
        title: seed.title.clone(),
        description: seed.description.clone(),
        content_type: seed.content_type,
        duration_label: seed.duration.clone(),
        image: seed.image.clone(),
        prerequisites: resolve_titles(&seed.prerequisites, titles, &seed.id)?,
        skill_tags: dedup(&seed.skills),
        completion_rate: seed.completion_rate as u8,
    };
    module.check()?;
    Ok(module)
}

fn convert_sub_modules(seed: &SeedModule) -> Result<Vec<SubModule>, CoreError> {
    ensure_unique(seed.sub_modules.iter().map(|s| s.id.as_str()), "sub-module")?;

    let titles: Vec<(&str, &str)> = seed
        .sub_modules
        .iter()
        .map(|s| (s.id.as_str(), s.title.as_str()))
        .collect();

    let subs = seed
        .sub_modules
        .iter()
        .map(|s| convert_sub_module(s, &titles))
        .collect::<Result<Vec<_>, _>>()?;

    // Anything past `locked` must have its prerequisites done.
    for sub in subs.iter().filter(|s| !s.is_locked()) {
        if !prerequisites_satisfied(sub, &subs) {
            return Err(CoreError::Validation(format!(
                "Sub-module '{}' of module '{}' is {} but its prerequisites are not completed",
                sub.id,
                seed.id,
                sub.status.as_str()
            )));
        }
    }
    Ok(subs)
}

fn convert_sub_module(seed: &SeedSubModule, titles: &[(&str, &str)]) -> Result<SubModule, CoreError> {
    let sub = SubModule {
        id: seed.id.clone(),
        title: seed.title.clone(),
        description: seed.description.clone(),
        content_type: seed.content_type,
        duration_label: seed.duration.clone(),
        status: seed.status,
        progress: seed.progress as u8,
        difficulty: seed.difficulty,
        estimated_time: seed.estimated_time.clone(),
        prerequisites: resolve_titles(&seed.prerequisites, titles, &seed.id)?,
        resources: seed
            .resources
            .iter()
            .map(|r| Resource {
                title: r.title.clone(),
                description: r.description.clone(),
                kind: r.kind,
                locator: r.url.clone(),
            })
            .collect(),
        video_ref: seed.video_url.clone(),
    };
    sub.check()?;
    Ok(sub)
}

/// Turn prerequisite titles into `{id, title}` references.
fn resolve_titles(
    wanted: &[String],
    known: &[(&str, &str)],
    owner: &str,
) -> Result<Vec<PrerequisiteRef>, CoreError> {
    wanted
        .iter()
        .map(|title| {
            known
                .iter()
                .find(|(_, t)| t == title)
                .map(|(id, t)| PrerequisiteRef {
                    id: (*id).to_string(),
                    title: (*t).to_string(),
                })
                .ok_or_else(|| {
                    CoreError::Validation(format!(
                        "'{owner}' lists unknown prerequisite '{title}'"
                    ))
                })
        })
        .collect()
}

fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>, label: &str) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!("Duplicate {label} id '{id}'")));
        }
    }
    Ok(())
}

fn dedup(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}
