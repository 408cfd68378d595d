//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `TRIAGE_BACKEND_URL`: backend base URL, default `http://127.0.0.1:8000`
//! - `TRIAGE_REQUEST_TIMEOUT_SECS`: upstream timeout, default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend_url: String,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `PORT` is set but not a port
    /// number, or when the backend URL is not `http(s)://`.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ServerError::Config(format!("PORT={raw}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let backend_url = parse_backend_url(std::env::var("TRIAGE_BACKEND_URL").ok().as_deref())?;
        let request_timeout_secs = env_parse_u64("TRIAGE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);
        Ok(Self { port, backend_url, request_timeout_secs })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Normalize the backend base: default when unset, no trailing slash.
fn parse_backend_url(raw: Option<&str>) -> Result<String, ServerError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ServerError::Config(format!("TRIAGE_BACKEND_URL must be http(s): {raw}")));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
