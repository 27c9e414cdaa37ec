//! Repository for refresh sessions.

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::session::{CreateRefreshSession, RefreshSession};

/// Provides create/lookup/revoke operations for refresh sessions.
#[derive(Debug, Default)]
pub struct SessionRepo {
    rows: RwLock<Vec<RefreshSession>>,
}

impl SessionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new session, returning the created row.
    pub async fn create(&self, input: CreateRefreshSession) -> RefreshSession {
        let session = RefreshSession {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: input.user_id,
            refresh_token_hash: input.refresh_token_hash,
            expires_at: input.expires_at,
            is_revoked: false,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(session.clone());
        session
    }

    /// Find an active session by its refresh token hash.
    ///
    /// Only returns sessions that are not revoked and not expired.
    pub async fn find_by_refresh_token_hash(&self, hash: &str) -> Option<RefreshSession> {
        let now = Utc::now();
        self.rows
            .read()
            .await
            .iter()
            .find(|s| s.refresh_token_hash == hash && s.is_active(now))
            .cloned()
    }

    /// Revoke a single session. Returns `true` if it was still active.
    pub async fn revoke(&self, id: &str) -> bool {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|s| s.id == id && !s.is_revoked) {
            Some(session) => {
                session.is_revoked = true;
                true
            }
            None => false,
        }
    }

    /// Revoke all active sessions for a user. Returns the count revoked.
    pub async fn revoke_all_for_user(&self, user_id: &str) -> u64 {
        let mut rows = self.rows.write().await;
        let mut count = 0;
        for session in rows
            .iter_mut()
            .filter(|s| s.user_id == user_id && !s.is_revoked)
        {
            session.is_revoked = true;
            count += 1;
        }
        count
    }

    /// Drop expired or revoked sessions. Returns the count removed.
    pub async fn cleanup_expired(&self) -> u64 {
        let now = Utc::now();
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|s| s.is_active(now));
        (before - rows.len()) as u64
    }
}
