//! Backend API seam for the terminal client.
//!
//! DESIGN
//! ======
//! [`QueueApi`] is the provider-neutral trait the operator drives; the real
//! implementation is [`HttpQueueApi`] over `reqwest`, and tests swap in a
//! hand-written mock. Requests are built from the shared endpoint table so
//! they match what the browser sends byte for byte.
//!
//! ERROR HANDLING
//! ==============
//! Every call maps to `triage::ApiError`: transport failures become
//! `Network`, `401` becomes `Unauthorized`, other non-2xx become `Status`,
//! bad bodies become `Decode`. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::de::DeserializeOwned;
use triage::api::{Method, bearer};
use triage::types::{LoginRequest, LoginResponse, PublicUrlResponse, QueueState, VerifyResponse};
use triage::{ApiError, Endpoint, Request, Session};

/// Operations the operator needs from the backend.
#[async_trait::async_trait]
pub trait QueueApi: Send + Sync {
    /// Run a state-returning request (`state`, `assign`, `skip`, `undo`).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    async fn execute(&self, token: &str, request: &Request) -> Result<QueueState, ApiError>;

    /// Validate `token`, returning the operator name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the token is no longer valid.
    async fn verify(&self, token: &str) -> Result<String, ApiError>;

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the backend rejects them.
    async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError>;

    /// End the session on the backend.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    /// Publicly reachable base URL for external document viewers.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    async fn public_url(&self, token: &str) -> Result<String, ApiError>;
}

/// [`QueueApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpQueueApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQueueApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        token: Option<&str>,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = endpoint.url(&self.base_url);
        let mut request = match endpoint.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header(reqwest::header::AUTHORIZATION, bearer(token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        if let Err(err) = triage::error::check_status(status) {
            tracing::warn!(method = endpoint.method().as_str(), path = endpoint.path(), status, "backend call failed");
            return Err(err);
        }
        tracing::debug!(method = endpoint.method().as_str(), path = endpoint.path(), status, "backend call ok");
        Ok(response)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        token: Option<&str>,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.send(endpoint, token, body).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl QueueApi for HttpQueueApi {
    async fn execute(&self, token: &str, request: &Request) -> Result<QueueState, ApiError> {
        self.call(request.endpoint(), Some(token), request.body().as_ref()).await
    }

    async fn verify(&self, token: &str) -> Result<String, ApiError> {
        let body: VerifyResponse = self.call(Endpoint::Verify, Some(token), None).await?;
        Ok(body.username)
    }

    async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let body = serde_json::to_value(&payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp: LoginResponse = self.call(Endpoint::Login, None, Some(&body)).await?;
        Ok(Session { token: resp.token, username: resp.username })
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.send(Endpoint::Logout, Some(token), None).await.map(|_| ())
    }

    async fn public_url(&self, token: &str) -> Result<String, ApiError> {
        let body: PublicUrlResponse = self.call(Endpoint::PublicUrl, Some(token), None).await?;
        Ok(body.url)
    }
}
