//! Shared triage domain model and operator state machine.
//!
//! This crate owns everything the browser client and the terminal client
//! agree on: the backend wire schema, the endpoint table, the error taxonomy,
//! the attachment viewer dispatch, and the shell reducer that applies API
//! outcomes to operator state. It has no transport of its own so it builds
//! for both native targets and `wasm32`.

pub mod api;
pub mod error;
pub mod roster;
pub mod selection;
pub mod session;
pub mod shell;
pub mod stack;
pub mod tabs;
pub mod types;
pub mod viewer;

pub use api::{Endpoint, Method};
pub use error::ApiError;
pub use roster::Employee;
pub use selection::{AssigneeSelection, SelectOutcome};
pub use session::{Session, SessionStore, SessionStoreError};
pub use shell::{Action, Command, Pending, Phase, Request, Shell, Transition};
pub use types::{AssignRequest, Card, FileInfo, QueueState, SkipRequest};
pub use viewer::{Viewer, ViewerContext};
