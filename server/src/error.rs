//! Startup errors for the server binary.
//!
//! Request-time failures never reach here: the proxy turns them into
//! `502 Bad Gateway` responses.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
