use std::sync::Arc;
use std::time::Duration;

use onboardpro_core::catalog::CatalogProvider;
use onboardpro_core::error::CoreError;
use onboardpro_core::identity::CredentialDirectory;
use onboardpro_store::accounts::credential_directory;
use onboardpro_store::catalog::MockCatalog;
use onboardpro_store::progress::ProgressBook;
use onboardpro_store::repositories::SessionRepo;
use onboardpro_store::seed::Dataset;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Read-only catalog collaborator.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Accounts that can log in.
    pub credentials: Arc<CredentialDirectory>,
    /// Per-trainee sub-module progress.
    pub progress: Arc<ProgressBook>,
    /// Issued refresh tokens.
    pub sessions: Arc<SessionRepo>,
}

impl AppState {
    /// Wire the in-memory collaborators around a validated dataset.
    pub fn from_dataset(config: ServerConfig, dataset: Dataset) -> Result<Self, CoreError> {
        let credentials = Arc::new(credential_directory(&dataset)?);
        let latency = Duration::from_millis(config.catalog_latency_ms);
        let fetch_timeout = Duration::from_millis(config.catalog_timeout_ms);
        let catalog: Arc<dyn CatalogProvider> = Arc::new(
            MockCatalog::new(Arc::new(dataset), latency).with_fetch_timeout(fetch_timeout),
        );

        Ok(Self {
            config: Arc::new(config),
            progress: Arc::new(ProgressBook::new(Arc::clone(&catalog))),
            catalog,
            credentials,
            sessions: Arc::new(SessionRepo::new()),
        })
    }
}
