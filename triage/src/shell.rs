//! Operator shell state machine.
//!
//! DESIGN
//! ======
//! The shell is plain data driven by three kinds of input: auth transitions,
//! operator commands, and API outcomes. Commands are turned into a
//! [`Pending`] request carrying a sequence number; transports execute the
//! request and hand the outcome back through [`Shell::finish_ok`] or
//! [`Shell::finish_err`]. A successful response replaces the whole queue
//! snapshot.
//!
//! Requests are allowed to overlap. A response older than the last applied
//! one is discarded, so a slow poll can never overwrite the result of a
//! newer assignment. Logging out keeps the sequence counter running and
//! marks every ticket issued so far as belonging to the dead session, so a
//! response that lands after a 401 is dropped too.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::api::Endpoint;
use crate::error::ApiError;
use crate::selection::{AssigneeSelection, SelectOutcome};
use crate::tabs::FileTabs;
use crate::types::{AssignRequest, Card, QueueState, SkipRequest};

/// Authentication phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated,
}

/// Kind of backend call the shell issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Load,
    Assign,
    Skip,
    Undo,
}

impl Action {
    /// Operator-facing message when this action fails.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load data",
            Self::Assign => "Failed to assign",
            Self::Skip => "Failed to skip",
            Self::Undo => "Failed to undo",
        }
    }
}

/// Operator intent that results in a backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Load,
    Assign(Vec<i64>),
    Skip,
    Undo,
}

/// Backend request produced by a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    State,
    Assign(AssignRequest),
    Skip(SkipRequest),
    Undo,
}

impl Request {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::State => Endpoint::State,
            Self::Assign(_) => Endpoint::Assign,
            Self::Skip(_) => Endpoint::Skip,
            Self::Undo => Endpoint::Undo,
        }
    }

    /// JSON body, or `None` for bodiless `GET`s.
    #[must_use]
    pub fn body(&self) -> Option<serde_json::Value> {
        match self {
            Self::State => None,
            Self::Assign(req) => serde_json::to_value(req).ok(),
            Self::Skip(req) => serde_json::to_value(req).ok(),
            Self::Undo => Some(serde_json::json!({})),
        }
    }
}

/// Identifies one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub action: Action,
}

/// A request ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending {
    pub ticket: Ticket,
    pub request: Request,
}

/// What applying an outcome did to the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The response replaced the queue snapshot.
    Applied,
    /// The response was older than the applied state and was dropped.
    Stale,
    /// The action failed; `error` holds the message.
    Failed,
    /// The session is gone; the caller must clear storage and show login.
    LoggedOut,
}

/// Resolution comment being drafted for the next assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
    pub open: bool,
}

/// Top-level operator state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shell {
    pub phase: Phase,
    pub username: Option<String>,
    pub queue: Option<QueueState>,
    pub error: Option<String>,
    pub selection: AssigneeSelection,
    pub tabs: FileTabs,
    pub comment: CommentDraft,
    pub public_base: Option<String>,
    in_flight: u32,
    next_seq: u64,
    applied_seq: u64,
    /// Last sequence number issued before the most recent logout.
    session_start: u64,
}

impl Shell {
    // =========================================================================
    // AUTH
    // =========================================================================

    /// A stored session exists and is being verified.
    pub fn begin_authentication(&mut self) {
        self.phase = Phase::Authenticating;
    }

    /// Verification or login succeeded.
    pub fn authenticated(&mut self, username: impl Into<String>) {
        self.phase = Phase::Authenticated;
        self.username = Some(username.into());
        self.error = None;
    }

    /// Drop everything back to the login view.
    pub fn logged_out(&mut self) {
        let next_seq = self.next_seq;
        *self = Self { next_seq, applied_seq: next_seq, session_start: next_seq, ..Self::default() };
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == Phase::Authenticated
    }

    // =========================================================================
    // QUEUE VIEW
    // =========================================================================

    /// True while any request is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// True before the first snapshot arrives.
    #[must_use]
    pub fn initial_load(&self) -> bool {
        self.queue.is_none()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.queue.as_ref().and_then(|q| q.current_card.as_ref())
    }

    #[must_use]
    pub fn current_card_id(&self) -> Option<i64> {
        self.current_card().map(|card| card.card_id)
    }

    #[must_use]
    pub fn queue_count(&self) -> u32 {
        self.queue.as_ref().map_or(0, |q| q.queue_count)
    }

    #[must_use]
    pub fn assigned_count(&self) -> u32 {
        self.queue.as_ref().map_or(0, |q| q.assigned_session_count)
    }

    /// Index of the open file tab for the current card.
    #[must_use]
    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.active(self.current_card().map_or(0, |card| card.files.len()))
    }

    pub fn select_tab(&mut self, index: usize) -> bool {
        let count = self.current_card().map_or(0, |card| card.files.len());
        self.tabs.select(index, count)
    }

    // =========================================================================
    // OPERATOR INPUT
    // =========================================================================

    /// Handle a click on an employee. In single-select mode this returns the
    /// command to send right away.
    pub fn click_employee(&mut self, id: i64) -> Option<Command> {
        match self.selection.select(id) {
            SelectOutcome::AssignNow(ids) => Some(Command::Assign(ids)),
            SelectOutcome::Updated => None,
        }
    }

    /// Confirm a multi-select assignment.
    #[must_use]
    pub fn confirm_multi(&self) -> Option<Command> {
        self.selection.confirm().map(Command::Assign)
    }

    pub fn toggle_multi(&mut self) {
        self.selection.toggle_mode();
    }

    pub fn open_comment(&mut self) {
        self.comment.open = true;
    }

    /// Close the comment dialog. The draft is kept either way.
    pub fn close_comment(&mut self) {
        self.comment.open = false;
    }

    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.comment.text = text.into();
    }

    pub fn set_public_base(&mut self, url: Option<String>) {
        self.public_base = url.filter(|u| !u.is_empty());
    }

    // =========================================================================
    // REQUEST LIFECYCLE
    // =========================================================================

    /// Turn `command` into a request and mark it in flight.
    ///
    /// Returns `None` when the command cannot be sent: not authenticated,
    /// assign/skip without a current card, or an empty assignment.
    pub fn prepare(&mut self, command: Command) -> Option<Pending> {
        if !self.is_authenticated() {
            return None;
        }
        let (action, request) = match command {
            Command::Load => (Action::Load, Request::State),
            Command::Undo => (Action::Undo, Request::Undo),
            Command::Skip => {
                let card_id = self.current_card_id()?;
                (Action::Skip, Request::Skip(SkipRequest { card_id }))
            }
            Command::Assign(ids) => {
                let card_id = self.current_card_id()?;
                let req = AssignRequest::from_selection(card_id, &ids, &self.comment.text)?;
                (Action::Assign, Request::Assign(req))
            }
        };
        self.next_seq += 1;
        self.in_flight += 1;
        Some(Pending { ticket: Ticket { seq: self.next_seq, action }, request })
    }

    /// Settle the in-flight count for `ticket`. False when the ticket was
    /// issued before the last logout or the shell is signed out.
    fn settle(&mut self, ticket: Ticket) -> bool {
        if ticket.seq <= self.session_start {
            return false;
        }
        self.in_flight = self.in_flight.saturating_sub(1);
        self.is_authenticated()
    }

    /// Apply a successful response.
    pub fn finish_ok(&mut self, ticket: Ticket, state: QueueState) -> Transition {
        if !self.settle(ticket) || ticket.seq < self.applied_seq {
            return Transition::Stale;
        }
        self.applied_seq = ticket.seq;

        let card_id = state.current_card_id();
        if self.tabs.sync(card_id) {
            self.selection.reset();
        }
        self.queue = Some(state);
        self.error = None;

        if ticket.action == Action::Assign {
            self.selection.reset();
            self.comment = CommentDraft::default();
        }
        Transition::Applied
    }

    /// Apply a failed response.
    pub fn finish_err(&mut self, ticket: Ticket, err: &ApiError) -> Transition {
        if !self.settle(ticket) {
            return Transition::Stale;
        }
        if err.is_unauthorized() {
            self.logged_out();
            return Transition::LoggedOut;
        }
        if ticket.seq < self.applied_seq {
            return Transition::Stale;
        }
        self.error = Some(ticket.action.failure_message().to_owned());
        Transition::Failed
    }
}
