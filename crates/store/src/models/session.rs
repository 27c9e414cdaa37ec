//! Refresh session model and DTOs.

use onboardpro_core::types::{EntityId, Timestamp};
use serde::Serialize;

/// One issued refresh token. Only the SHA-256 hash of the token is kept.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshSession {
    pub id: EntityId,
    pub user_id: EntityId,
    #[serde(skip_serializing)]
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

impl RefreshSession {
    pub fn is_active(&self, now: Timestamp) -> bool {
        !self.is_revoked && self.expires_at > now
    }
}

/// DTO for creating a new refresh session.
pub struct CreateRefreshSession {
    pub user_id: EntityId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
