//! CLI error type.

use triage::{ApiError, SessionStoreError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not logged in; run `triage-cli login` first")]
    NotLoggedIn,
    #[error("session expired; run `triage-cli login` again")]
    SessionExpired,
    #[error("nothing to {0}: the queue has no current card")]
    NoCurrentCard(&'static str),
    #[error("unknown employee id {0}; see `triage-cli employees`")]
    UnknownEmployee(i64),
    #[error("no employees given")]
    NoAssignees,
    #[error("{message}: {source}")]
    Action {
        message: &'static str,
        #[source]
        source: ApiError,
    },
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionStoreError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
