//! Terminal operator session driving the shared shell reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each CLI invocation builds an [`Operator`], restores the stored session,
//! and runs one or more commands through `Shell::prepare` / `finish_*` so the
//! terminal follows exactly the same transition rules as the browser.
//!
//! ERROR HANDLING
//! ==============
//! An `Unauthorized` outcome from any call clears the stored session and
//! surfaces as [`CliError::SessionExpired`]. Other failures carry the
//! shell's action-specific message.

#[cfg(test)]
#[path = "operator_test.rs"]
mod operator_test;

use triage::{Command, Employee, QueueState, SessionStore, Shell, Transition};

use crate::api::QueueApi;
use crate::error::CliError;

pub struct Operator<A, S> {
    api: A,
    store: S,
    roster: Vec<Employee>,
    shell: Shell,
    token: Option<String>,
}

impl<A: QueueApi, S: SessionStore> Operator<A, S> {
    pub fn new(api: A, store: S, roster: Vec<Employee>) -> Self {
        Self { api, store, roster, shell: Shell::default(), token: None }
    }

    #[must_use]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Bearer token of the restored or freshly created session.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Log in with credentials and persist the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the credentials or the session
    /// cannot be stored.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<String, CliError> {
        self.shell.begin_authentication();
        let session = match self.api.login(username, password).await {
            Ok(session) => session,
            Err(e) => {
                self.shell.logged_out();
                return Err(e.into());
            }
        };
        self.store.save(&session)?;
        tracing::info!(username = %session.username, token = %session.token_hint(), "logged in");
        self.shell.authenticated(session.username.clone());
        self.token = Some(session.token);
        Ok(session.username)
    }

    /// Verify the stored session with the backend.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NotLoggedIn`] without a stored session and
    /// [`CliError::SessionExpired`] when the backend rejects it.
    pub async fn restore(&mut self) -> Result<String, CliError> {
        let session = self.store.load().ok_or(CliError::NotLoggedIn)?;
        self.shell.begin_authentication();
        match self.api.verify(&session.token).await {
            Ok(username) => {
                tracing::debug!(%username, token = %session.token_hint(), "session verified");
                self.shell.authenticated(username.clone());
                self.token = Some(session.token);
                Ok(username)
            }
            Err(e) => {
                self.expire()?;
                if e.is_unauthorized() { Err(CliError::SessionExpired) } else { Err(e.into()) }
            }
        }
    }

    /// Fetch the public base URL so word documents can use the external
    /// viewer. Failure only degrades those files to downloads.
    pub async fn load_public_url(&mut self) {
        let Some(token) = self.token.as_deref() else {
            return;
        };
        match self.api.public_url(token).await {
            Ok(url) => self.shell.set_public_base(Some(url)),
            Err(e) => tracing::info!(error = %e, "no public url; word documents fall back to download"),
        }
    }

    /// End the session. The stored session is cleared even if the backend
    /// call fails.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local session file cannot be removed.
    pub async fn logout(&mut self) -> Result<(), CliError> {
        if let Some(session) = self.store.load() {
            if let Err(e) = self.api.logout(&session.token).await {
                tracing::warn!(error = %e, "backend logout failed; clearing local session anyway");
            }
        }
        self.store.clear()?;
        self.shell.logged_out();
        self.token = None;
        Ok(())
    }

    fn expire(&mut self) -> Result<(), CliError> {
        self.shell.logged_out();
        self.token = None;
        self.store.clear()?;
        Ok(())
    }

    // =========================================================================
    // QUEUE ACTIONS
    // =========================================================================

    /// Run one shell command against the backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the command cannot be sent (no card), the
    /// session expired, or the backend call failed.
    pub async fn run(&mut self, command: Command) -> Result<Transition, CliError> {
        let label = match &command {
            Command::Load => "load",
            Command::Assign(_) => "assign",
            Command::Skip => "skip",
            Command::Undo => "undo",
        };
        let token = self.token.clone().ok_or(CliError::NotLoggedIn)?;
        let Some(pending) = self.shell.prepare(command) else {
            return Err(CliError::NoCurrentCard(label));
        };

        let result = self.api.execute(&token, &pending.request).await;
        match result {
            Ok(state) => Ok(self.shell.finish_ok(pending.ticket, state)),
            Err(err) => match self.shell.finish_err(pending.ticket, &err) {
                Transition::LoggedOut => {
                    self.expire()?;
                    Err(CliError::SessionExpired)
                }
                Transition::Stale => Ok(Transition::Stale),
                _ => Err(CliError::Action { message: pending.ticket.action.failure_message(), source: err }),
            },
        }
    }

    /// Refresh the queue snapshot.
    ///
    /// # Errors
    ///
    /// See [`Operator::run`].
    pub async fn refresh(&mut self) -> Result<Option<&QueueState>, CliError> {
        self.run(Command::Load).await?;
        Ok(self.shell.queue.as_ref())
    }

    /// Assign the current card. One id assigns directly; several go through
    /// multi-select with the first id as owner.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or unknown id list, or when the
    /// underlying request fails.
    pub async fn assign(&mut self, ids: &[i64], comment: Option<&str>) -> Result<Transition, CliError> {
        if ids.is_empty() {
            return Err(CliError::NoAssignees);
        }
        if let Some(unknown) = ids.iter().find(|id| triage::roster::find(&self.roster, **id).is_none()) {
            return Err(CliError::UnknownEmployee(*unknown));
        }
        if let Some(comment) = comment {
            self.shell.set_comment(comment);
        }

        let command = if let [id] = ids {
            self.shell.click_employee(*id)
        } else {
            if !self.shell.selection.is_multi() {
                self.shell.toggle_multi();
            }
            for id in ids {
                if !self.shell.selection.is_selected(*id) {
                    let _ = self.shell.click_employee(*id);
                }
            }
            self.shell.confirm_multi()
        };
        let command = command.ok_or(CliError::NoAssignees)?;
        self.run(command).await
    }
}
