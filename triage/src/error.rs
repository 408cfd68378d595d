//! Error taxonomy shared by every transport.
//!
//! Only `Unauthorized` changes control flow (forced logout). Everything else
//! is terminal for the action that raised it and needs an operator retry.

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered `401`; the stored session is no longer valid.
    #[error("session expired or unauthorized")]
    Unauthorized,
    /// Any other non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Classify an HTTP status code.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for `401` and [`ApiError::Status`] for
/// every other status outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        other => Err(ApiError::Status(other)),
    }
}
