//! Session-based admin authentication: login, token validation, logout, expiry.

use crate::models::Session;
use chrono::{Duration, Utc};
use std::collections::HashMap;

/// Errors from login or session validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    /// Login request missing the username or the password.
    MissingCredentials,
    /// Username/password pair does not match the configured admin identity.
    InvalidCredentials,
    /// No session token supplied on an authenticated request.
    MissingToken,
    /// Token unknown, or the session it named has expired.
    InvalidSession,
}

impl AuthError {
    /// True for the missing-fields login error (400 rather than 401).
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, AuthError::MissingCredentials)
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "Username and password are required"),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::MissingToken => write!(f, "Authentication required"),
            AuthError::InvalidSession => write!(f, "Invalid or expired session"),
        }
    }
}

/// The single admin identity allowed to log in.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact-string comparison against the configured pair.
    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// In-memory session store. Owns every `Session` record; sessions expire
/// `ttl` after their last successful validation (sliding window).
#[derive(Clone, Debug)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
    ttl: Duration,
    credentials: AdminCredentials,
}

impl SessionStore {
    pub fn new(credentials: AdminCredentials, ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
            credentials,
        }
    }

    /// Log in with the admin credentials, minting a fresh session.
    ///
    /// Empty username or password is reported as missing fields before the
    /// pair is compared at all.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Session, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !self.credentials.matches(username, password) {
            return Err(AuthError::InvalidCredentials);
        }
        let session = Session::new(username, self.ttl);
        self.sessions.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    /// Validate a token: the authorization gate for every mutating endpoint.
    ///
    /// A missing token, an unknown token, and an expired session all fail.
    /// An expired session is removed the moment it is seen (lazy expiry), so
    /// no expired session is ever returned even before a sweep runs. On
    /// success the expiry window slides forward by the TTL and the refreshed
    /// session is returned.
    pub fn validate(&mut self, token: Option<&str>) -> Result<Session, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;
        let now = Utc::now();
        if self.sessions.get(token).is_some_and(|s| s.is_expired_at(now)) {
            self.sessions.remove(token);
            return Err(AuthError::InvalidSession);
        }
        let ttl = self.ttl;
        let session = self
            .sessions
            .get_mut(token)
            .ok_or(AuthError::InvalidSession)?;
        session.touch(ttl);
        Ok(session.clone())
    }

    /// Remove the session if present. Idempotent: unknown tokens are a no-op.
    pub fn logout(&mut self, token: &str) {
        self.sessions.remove(token);
    }

    /// Drop every expired session and return how many were removed. This is
    /// the periodic sweep companion; `validate` already refuses expired
    /// sessions inline, so correctness never depends on it.
    pub fn purge_expired(&mut self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired_at(now));
        before - self.sessions.len()
    }

    /// Number of live (stored) sessions, expired or not.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
