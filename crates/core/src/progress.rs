//! Progress Tracker: aggregate module counts, percentages, and the
//! sub-module progress state machine.

use serde::{Deserialize, Serialize};

use crate::catalog::{Module, SubModule, SubModuleStatus};
use crate::error::CoreError;
use crate::types::{EntityId, PERCENT_MAX};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Counts over a trainee's module set.
///
/// `completed_count + in_progress_count + not_started_count` always equals
/// the number of modules summarized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed_count: u32,
    pub in_progress_count: u32,
    pub not_started_count: u32,
}

impl ProgressSummary {
    pub fn total(&self) -> u32 {
        self.completed_count + self.in_progress_count + self.not_started_count
    }
}

/// 100 counts as completed, 0 as not started, anything else as in progress.
pub fn summarize(modules: &[Module]) -> ProgressSummary {
    modules
        .iter()
        .fold(ProgressSummary::default(), |mut acc, module| {
            match module.completion_rate {
                0 => acc.not_started_count += 1,
                rate if rate >= PERCENT_MAX => acc.completed_count += 1,
                _ => acc.in_progress_count += 1,
            }
            acc
        })
}

/// `round(100 * completed / total)`, defined as 0 for an empty module set.
pub fn overall_percent(summary: &ProgressSummary) -> u8 {
    rounded_percent(summary.completed_count, summary.total())
}

/// Mean sub-module progress, rounded; 0 for a module without sub-modules.
pub fn roadmap_percent(sub_modules: &[SubModule]) -> u8 {
    mean_percent(sub_modules.iter().map(|s| s.progress))
}

/// Rounded mean of a set of percentages; 0 for an empty set.
pub fn mean_percent(percents: impl IntoIterator<Item = u8>) -> u8 {
    let (sum, count) = percents
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), p| (sum + u32::from(p), count + 1));
    rounded_percent(sum, count * u32::from(PERCENT_MAX))
}

/// Round-half-up of `100 * part / whole` in integer arithmetic.
fn rounded_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let scaled = (200 * u64::from(part) + u64::from(whole)) / (2 * u64::from(whole));
    scaled.min(u64::from(PERCENT_MAX)) as u8
}

// ---------------------------------------------------------------------------
// Sub-module state machine
// ---------------------------------------------------------------------------

/// Advance a sub-module's progress by `delta` percentage points.
///
/// - The result is clamped to `0..=100`; reaching 100 marks it completed.
/// - Negative deltas are rejected, so progress never decreases here.
/// - A locked sub-module cannot advance until its prerequisites are done.
/// - A completed sub-module is returned unchanged (reviewing it is allowed).
pub fn advance_sub_module_progress(
    sub_module: &SubModule,
    delta: i32,
) -> Result<SubModule, CoreError> {
    if delta < 0 {
        return Err(CoreError::Validation(format!(
            "Progress delta must not be negative (got {delta})"
        )));
    }

    match sub_module.status {
        SubModuleStatus::Locked => {
            return Err(CoreError::Conflict(format!(
                "Sub-module '{}' is locked until its prerequisites are completed",
                sub_module.id
            )));
        }
        SubModuleStatus::Completed => return Ok(sub_module.clone()),
        SubModuleStatus::NotStarted | SubModuleStatus::InProgress => {}
    }

    let progress = (i64::from(sub_module.progress) + i64::from(delta))
        .clamp(0, i64::from(PERCENT_MAX)) as u8;

    let mut next = sub_module.clone();
    next.progress = progress;
    next.status = SubModuleStatus::for_progress(progress);
    Ok(next)
}

/// Whether every prerequisite of `sub_module` is a completed sibling.
///
/// A prerequisite that does not resolve to a sibling counts as unmet.
pub fn prerequisites_satisfied(sub_module: &SubModule, siblings: &[SubModule]) -> bool {
    sub_module.prerequisites.iter().all(|prereq| {
        siblings
            .iter()
            .any(|s| s.id == prereq.id && s.is_completed())
    })
}

/// Unlock every locked sub-module whose prerequisites are all completed.
///
/// Returns the ids that moved from `locked` to `not_started`. Nothing is ever
/// re-locked.
pub fn refresh_locks(sub_modules: &mut [SubModule]) -> Vec<EntityId> {
    let view: &[SubModule] = sub_modules;
    let unlockable: Vec<usize> = view
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_locked() && prerequisites_satisfied(s, view))
        .map(|(idx, _)| idx)
        .collect();

    unlockable
        .into_iter()
        .map(|idx| {
            let sub_module = &mut sub_modules[idx];
            sub_module.status = SubModuleStatus::NotStarted;
            sub_module.progress = 0;
            sub_module.id.clone()
        })
        .collect()
}
