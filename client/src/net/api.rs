//! REST API helpers for the triage backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A `401` on a session-bearing
//! endpoint clears the stored credentials and reloads to `/login` before the
//! error is returned; callers still see `ApiError::Unauthorized` so the shell
//! can drop its state. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use triage::types::SkipRequest;
use triage::types::{AssignRequest, QueueState};
#[cfg(any(test, feature = "hydrate"))]
use triage::Endpoint;
use triage::{ApiError, Request, Session};

/// Base URL prepended to every API path. Empty means same origin, which is
/// how the bundled server proxies the backend. Override at build time with
/// `TRIAGE_API_BASE`.
pub const API_BASE: &str = match option_env!("TRIAGE_API_BASE") {
    Some(base) => base,
    None => "",
};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(endpoint: Endpoint) -> String {
    endpoint.url(API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(triage::api::bearer)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn call<T: serde::de::DeserializeOwned>(
    endpoint: Endpoint,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    use triage::SessionStore as _;
    use triage::api::{AUTHORIZATION, Method};

    let token = crate::util::session::BrowserSessionStore.load().map(|s| s.token);
    let url = endpoint_url(endpoint);
    let mut builder = match endpoint.method() {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
    };
    if let Some(value) = auth_header(token.as_deref()) {
        builder = builder.header(AUTHORIZATION, &value);
    }
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if let Err(err) = triage::error::check_status(resp.status()) {
        log::warn!("{} {} failed: {err}", endpoint.method().as_str(), endpoint.path());
        if err.is_unauthorized() && endpoint.uses_session() {
            crate::util::session::force_logout();
        }
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Run a shell request and return the replacement queue snapshot.
///
/// # Errors
///
/// Returns the [`ApiError`] of the underlying call.
pub async fn execute(request: &Request) -> Result<QueueState, ApiError> {
    match request {
        Request::State => get_state().await,
        Request::Assign(req) => assign_card(req).await,
        Request::Skip(req) => skip_card(req.card_id).await,
        Request::Undo => undo_last_action().await,
    }
}

/// Fetch the current queue snapshot via `GET /api/state`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a bad body.
pub async fn get_state() -> Result<QueueState, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        call(Endpoint::State, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Assign the current card via `POST /api/assign`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a bad body.
pub async fn assign_card(req: &AssignRequest) -> Result<QueueState, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(req).map_err(|e| ApiError::Decode(e.to_string()))?;
        call(Endpoint::Assign, Some(&body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(unavailable())
    }
}

/// Skip a card via `POST /api/skip`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a bad body.
pub async fn skip_card(card_id: i64) -> Result<QueueState, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(SkipRequest { card_id }).map_err(|e| ApiError::Decode(e.to_string()))?;
        call(Endpoint::Skip, Some(&body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = card_id;
        Err(unavailable())
    }
}

/// Undo the operator's last action via `POST /api/undo`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a bad body.
pub async fn undo_last_action() -> Result<QueueState, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        call(Endpoint::Undo, Some(&serde_json::json!({}))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Check the stored token via `GET /api/verify`, returning the username.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is no longer valid.
pub async fn verify_token() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: triage::types::VerifyResponse = call(Endpoint::Verify, None).await?;
        Ok(body.username)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Exchange credentials for a session via `POST /api/login`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the backend rejects the
/// credentials.
pub async fn login(username: &str, password: &str) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = triage::types::LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let body = serde_json::to_value(&payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp: triage::types::LoginResponse = call(Endpoint::Login, Some(&body)).await?;
        Ok(Session { token: resp.token, username: resp.username })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(unavailable())
    }
}

/// End the session via `POST /api/logout`. Best effort; the response is
/// ignored.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = call::<serde_json::Value>(Endpoint::Logout, None).await;
    }
}

/// Fetch the publicly reachable base for external document viewers via
/// `GET /api/public-url`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a bad body.
pub async fn public_url() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: triage::types::PublicUrlResponse = call(Endpoint::PublicUrl, None).await?;
        Ok(body.url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}
