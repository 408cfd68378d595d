//! File-backed session persistence for the terminal client.
//!
//! The session is one small JSON object (`{token, username}`). A missing or
//! unreadable file means "not logged in".

use std::path::{Path, PathBuf};

use triage::{Session, SessionStore, SessionStoreError};

#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if !session.token.is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt session file");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let body = serde_json::to_string_pretty(session).map_err(|e| SessionStoreError::Write(e.to_string()))?;
        std::fs::write(&self.path, body).map_err(|e| SessionStoreError::Write(format!("{}: {e}", self.path.display())))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Write(format!("{}: {e}", self.path.display()))),
        }
    }
}
