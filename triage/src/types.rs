//! Wire DTOs for the triage backend.
//!
//! DESIGN
//! ======
//! These mirror the backend JSON exactly. Every state-returning endpoint
//! answers with a full [`QueueState`], which callers swap in wholesale; no
//! partial merge is ever attempted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Attachment metadata for a queued card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Original file name, also used as the download name.
    pub name: String,
    /// Extension without the leading dot. May be empty or mixed case.
    #[serde(default)]
    pub ext: String,
    /// Backend-relative (or absolute) URL of the file. May be empty.
    #[serde(default)]
    pub url: String,
}

impl FileInfo {
    /// Lowercased extension, falling back to the suffix of `name` when the
    /// backend did not send one.
    #[must_use]
    pub fn extension(&self) -> String {
        let ext = self.ext.trim().trim_start_matches('.');
        if !ext.is_empty() {
            return ext.to_ascii_lowercase();
        }
        self.name
            .rsplit_once('.')
            .map(|(_, suffix)| suffix.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

/// One queued incoming document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub card_id: i64,
    pub incoming_no: i64,
    pub title: String,
    #[serde(default)]
    pub files: Vec<FileInfo>,
}

/// Backend snapshot returned by `/api/state` and every mutating endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueState {
    #[serde(default)]
    pub queue_count: u32,
    #[serde(default)]
    pub deferred_count: u32,
    #[serde(default)]
    pub assigned_session_count: u32,
    #[serde(default)]
    pub current_card: Option<Card>,
}

impl QueueState {
    #[must_use]
    pub fn current_card_id(&self) -> Option<i64> {
        self.current_card.as_ref().map(|card| card.card_id)
    }
}

/// `POST /api/assign` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRequest {
    pub card_id: i64,
    pub owner_id: i64,
    #[serde(default)]
    pub co_owner_ids: Vec<i64>,
    #[serde(default)]
    pub comment_text: String,
    #[serde(default)]
    pub multi: bool,
}

impl AssignRequest {
    /// Build an assignment from employee ids in click order.
    ///
    /// The first id becomes the owner and the rest co-owners. Returns `None`
    /// for an empty selection.
    #[must_use]
    pub fn from_selection(card_id: i64, ids: &[i64], comment_text: &str) -> Option<Self> {
        let (&owner_id, rest) = ids.split_first()?;
        Some(Self {
            card_id,
            owner_id,
            co_owner_ids: rest.to_vec(),
            comment_text: comment_text.to_owned(),
            multi: ids.len() > 1,
        })
    }
}

/// `POST /api/skip` payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRequest {
    pub card_id: i64,
}

/// `POST /api/login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// `GET /api/verify` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub username: String,
}

/// `GET /api/public-url` response: a publicly reachable base for file links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUrlResponse {
    pub url: String,
}
