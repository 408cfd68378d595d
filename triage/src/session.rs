//! Operator session and its persistence seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the session in `localStorage` under [`TOKEN_KEY`] and
//! [`USERNAME_KEY`]; the terminal client keeps it in a JSON file. Both
//! implement [`SessionStore`] so login, verification, and 401 recovery share
//! one contract.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the operator name.
pub const USERNAME_KEY: &str = "username";

/// Authenticated operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    /// Short token prefix safe to put in logs.
    #[must_use]
    pub fn token_hint(&self) -> String {
        let prefix: String = self.token.chars().take(6).collect();
        format!("{prefix}...")
    }
}

/// Failure writing or clearing persisted session data.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Persistence for the single operator session.
pub trait SessionStore {
    /// Stored session, if both token and username are present.
    fn load(&self) -> Option<Session>;

    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Forget the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// In-process store, used by tests and as a fallback when no persistent
/// storage is available.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { inner: Mutex::new(Some(session)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut guard = self.inner.lock().map_err(|e| SessionStoreError::Write(e.to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut guard = self.inner.lock().map_err(|e| SessionStoreError::Write(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
