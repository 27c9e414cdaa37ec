//! Identity Store: the authenticated user, role predicates, and the session
//! snapshot that survives a reload.
//!
//! [`IdentityStore`] is an explicit application-context object. It is created
//! with [`IdentityStore::init`], which restores any persisted snapshot, and
//! torn down with [`IdentityStore::logout`], which clears it.
//!
//! It models a single client session: one signed-in user per store. The HTTP
//! service is multi-user and stateless per request, so it authenticates
//! through [`CredentialDirectory`] directly and carries the identity in JWT
//! claims instead. Embedders that keep a local session (a CLI or desktop
//! client) pair the store with `onboardpro_store::file_storage::FileStorage`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::password::verify_password;
use crate::roles::Role;
use crate::session_storage::{SessionStorage, SESSION_KEY};
use crate::types::EntityId;

/// The authenticated user's role-bearing profile.
///
/// This exact shape is what gets persisted; it never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    pub fn is_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// One login-capable account: the identity plus its password hash.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub identity: Identity,
    pub password_hash: String,
}

/// Lookup table of every account that can log in.
#[derive(Debug, Clone, Default)]
pub struct CredentialDirectory {
    records: Vec<CredentialRecord>,
}

impl CredentialDirectory {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    /// Match `email` exactly (case-sensitive) and verify `password`.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Identity, CoreError> {
        let record = self
            .records
            .iter()
            .find(|r| r.identity.email == email)
            .ok_or(CoreError::InvalidCredentials)?;

        if !verify_password(password, &record.password_hash)? {
            return Err(CoreError::InvalidCredentials);
        }
        Ok(record.identity.clone())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Identity> {
        self.records
            .iter()
            .map(|r| &r.identity)
            .find(|identity| identity.id == id)
    }

    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.records.iter().map(|r| &r.identity)
    }
}

/// Holds the current identity and keeps the persisted snapshot in step.
pub struct IdentityStore<S: SessionStorage> {
    directory: Arc<CredentialDirectory>,
    storage: S,
    current: Option<Identity>,
}

impl<S: SessionStorage> IdentityStore<S> {
    /// Build the store and restore a previously persisted identity.
    ///
    /// A snapshot that cannot be read or parsed is discarded.
    pub fn init(directory: Arc<CredentialDirectory>, mut storage: S) -> Self {
        let current = match storage.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    tracing::debug!(user_id = %identity.id, "Restored persisted session");
                    Some(identity)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable session snapshot");
                    if let Err(e) = storage.remove(SESSION_KEY) {
                        tracing::warn!(error = %e, "Failed to clear unreadable session snapshot");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unavailable, starting signed out");
                None
            }
        };

        Self {
            directory,
            storage,
            current,
        }
    }

    /// Authenticate and replace the current identity.
    ///
    /// On failure the current identity (if any) is left untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, CoreError> {
        let identity = self.directory.authenticate(email, password)?;

        let snapshot = serde_json::to_string(&identity)
            .map_err(|e| CoreError::Internal(format!("Session serialization error: {e}")))?;
        if let Err(e) = self.storage.set(SESSION_KEY, &snapshot) {
            tracing::warn!(error = %e, "Session snapshot not persisted");
        }

        tracing::info!(user_id = %identity.id, role = %identity.role, "Logged in");
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Clear the current identity and its persisted snapshot. Never fails.
    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            tracing::info!(user_id = %identity.id, "Logged out");
        }
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "Session snapshot not cleared");
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_role(&self, role: Role) -> bool {
        self.current.as_ref().is_some_and(|i| i.is_role(role))
    }

    pub fn is_trainer(&self) -> bool {
        self.is_role(Role::Trainer)
    }

    pub fn is_trainee(&self) -> bool {
        self.is_role(Role::Trainee)
    }

    /// Hand the storage back, e.g. to re-open it as after a reload.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
