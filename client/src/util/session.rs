//! Browser `localStorage` session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and username live under the `authToken` and `username` keys so
//! a reload keeps the operator signed in until the backend rejects the token.
//! SSR paths no-op: there is no session on the server.

use triage::session::{TOKEN_KEY, USERNAME_KEY};
use triage::{Session, SessionStore, SessionStoreError};

/// [`SessionStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, SessionStoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SessionStoreError::Unavailable("localStorage".to_owned()))
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage().ok()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
            let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
            session_from_parts(Some(token), Some(username))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage()?;
            storage
                .set_item(TOKEN_KEY, &session.token)
                .and_then(|()| storage.set_item(USERNAME_KEY, &session.username))
                .map_err(|e| SessionStoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, TOKEN_KEY, USERNAME_KEY);
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage()?;
            storage
                .remove_item(TOKEN_KEY)
                .and_then(|()| storage.remove_item(USERNAME_KEY))
                .map_err(|e| SessionStoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

/// Both keys must be present and non-empty for a session to count.
pub fn session_from_parts(token: Option<String>, username: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let username = username.filter(|u| !u.is_empty())?;
    Some(Session { token, username })
}

/// Drop stored credentials and reload to the login page.
pub fn force_logout() {
    if let Err(e) = BrowserSessionStore.clear() {
        #[cfg(feature = "hydrate")]
        log::warn!("failed to clear session: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
    }
    redirect("/login");
}

/// Full-page navigation to `path`.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
