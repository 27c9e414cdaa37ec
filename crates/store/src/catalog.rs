//! Mock [`CatalogProvider`] serving the seed dataset after a fixed delay.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use onboardpro_core::catalog::{CatalogProvider, Module, SubModule, TraineeRosterEntry};
use onboardpro_core::error::CoreError;
use onboardpro_core::leaderboard::LeaderboardEntry;
use onboardpro_core::quiz::QuizQuestion;

use crate::seed::Dataset;

/// Upper bound on a single simulated round trip unless configured otherwise.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only catalog over a validated [`Dataset`].
///
/// Every call sleeps `latency` first, standing in for a network round trip.
/// A round trip that outlasts `fetch_timeout` fails with
/// [`CoreError::Unavailable`]. Answers are deterministic for a given dataset.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    dataset: Arc<Dataset>,
    latency: Duration,
    fetch_timeout: Duration,
}

impl MockCatalog {
    pub fn new(dataset: Arc<Dataset>, latency: Duration) -> Self {
        Self {
            dataset,
            latency,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Builtin seed data with no simulated delay.
    pub fn instant() -> Result<Self, CoreError> {
        Ok(Self::new(Arc::new(Dataset::builtin()?), Duration::ZERO))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    async fn round_trip(&self) -> Result<(), CoreError> {
        if self.latency.is_zero() {
            return Ok(());
        }
        tokio::time::timeout(self.fetch_timeout, tokio::time::sleep(self.latency))
            .await
            .map_err(|_| {
                tracing::warn!(
                    latency_ms = self.latency.as_millis() as u64,
                    timeout_ms = self.fetch_timeout.as_millis() as u64,
                    "Catalog fetch timed out"
                );
                CoreError::Unavailable(format!(
                    "Catalog did not answer within {} ms",
                    self.fetch_timeout.as_millis()
                ))
            })
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn list_modules(&self) -> Result<Vec<Module>, CoreError> {
        self.round_trip().await?;
        Ok(self.dataset.modules.clone())
    }

    async fn list_sub_modules(&self, module_id: &str) -> Result<Vec<SubModule>, CoreError> {
        self.round_trip().await?;
        self.dataset
            .sub_modules
            .get(module_id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Module", module_id))
    }

    async fn quiz_for(&self, module_id: &str) -> Result<Vec<QuizQuestion>, CoreError> {
        self.round_trip().await?;
        if !self.dataset.sub_modules.contains_key(module_id) {
            return Err(CoreError::not_found("Module", module_id));
        }
        self.dataset
            .quizzes
            .get(module_id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Quiz", module_id))
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, CoreError> {
        self.round_trip().await?;
        Ok(self.dataset.leaderboard.clone())
    }

    async fn trainee_roster(&self) -> Result<Vec<TraineeRosterEntry>, CoreError> {
        self.round_trip().await?;
        Ok(self.dataset.roster.clone())
    }
}
