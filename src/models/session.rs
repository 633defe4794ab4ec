//! Session data structures for admin authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity a session was issued to. Only the single admin identity
/// exists today; the struct is the contract point for future roles.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
}

/// An authentication session, keyed by an opaque token.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque, unguessable token presented by the client on every request.
    pub session_id: String,
    pub user: SessionUser,
    pub created_at: DateTime<Utc>,
    /// Last successful use; refreshed on every validation.
    pub timestamp: DateTime<Utc>,
    /// Sliding expiry: pushed forward by the TTL on every validation.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Mint a fresh session for `username`, expiring `ttl` from now.
    pub fn new(username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4().to_string(),
            user: SessionUser {
                username: username.into(),
            },
            created_at: now,
            timestamp: now,
            expires_at: now + ttl,
        }
    }

    /// Whether the session has expired as of `now` (expiry instant inclusive).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Slide the expiry window forward: `expires_at = now + ttl`, and record
    /// the use in `timestamp`.
    pub fn touch(&mut self, ttl: Duration) {
        let now = Utc::now();
        self.timestamp = now;
        self.expires_at = now + ttl;
    }
}
