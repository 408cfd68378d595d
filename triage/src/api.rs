//! Backend endpoint table and URL helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client (`gloo-net`) and the terminal client (`reqwest`) both
//! build requests from this table so method, path, and auth requirements
//! never drift between transports.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

/// HTTP method used by an [`Endpoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Every backend JSON endpoint the operator clients call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    State,
    Assign,
    Skip,
    Undo,
    Verify,
    Logout,
    Login,
    PublicUrl,
}

impl Endpoint {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::State | Self::Verify | Self::PublicUrl => Method::Get,
            Self::Assign | Self::Skip | Self::Undo | Self::Logout | Self::Login => Method::Post,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::State => "/api/state",
            Self::Assign => "/api/assign",
            Self::Skip => "/api/skip",
            Self::Undo => "/api/undo",
            Self::Verify => "/api/verify",
            Self::Logout => "/api/logout",
            Self::Login => "/api/login",
            Self::PublicUrl => "/api/public-url",
        }
    }

    /// Whether a `401` from this endpoint means the stored session expired.
    ///
    /// `Login` is the only call made without a session; a `401` there is a
    /// credentials rejection, not an expiry.
    #[must_use]
    pub fn uses_session(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Absolute (or base-relative) URL for this endpoint.
    #[must_use]
    pub fn url(self, base: &str) -> String {
        join_url(base, self.path())
    }
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Backend path of an attachment.
#[must_use]
pub fn file_path(incoming_no: i64, filename: &str) -> String {
    format!("/files/{incoming_no}/{}", encode_component(filename))
}

/// Append `token` as a query parameter so frames and images load without
/// custom headers.
#[must_use]
pub fn with_token(url: &str, token: Option<&str>) -> String {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return url.to_owned();
    };
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}token={}", encode_component(token))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
