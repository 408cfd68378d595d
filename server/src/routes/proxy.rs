//! Same-origin forwarding to the triage backend.
//!
//! DESIGN
//! ======
//! The proxy is deliberately dumb: method, path, query and body pass through
//! unchanged along with a small allow-list of headers. Status codes come
//! back verbatim, so a backend `401` still reaches the browser and triggers
//! its forced logout. Response bodies are streamed chunk by chunk, so a
//! large attachment is never held in memory whole.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures (backend down, timeout) become `502 Bad Gateway`.
//! Once the status line has been relayed, a body error mid-stream can only
//! abort the connection. Nothing is retried.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend.
static FORWARD_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the browser.
static FORWARD_RESPONSE_HEADERS: [HeaderName; 5] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::CONTENT_DISPOSITION,
    header::CACHE_CONTROL,
    header::LAST_MODIFIED,
];

/// Backend URL for an incoming request URI.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{}", backend_url.trim_end_matches('/'), path_and_query)
}

fn copy_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        if let Some(value) = from.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// Forward the request to the backend and relay its response.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.backend_url, &uri);
    let mut request = state
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers, &FORWARD_REQUEST_HEADERS));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, path = uri.path(), error = %e, "backend unreachable");
            return (StatusCode::BAD_GATEWAY, "backend unavailable").into_response();
        }
    };

    let status = upstream.status();
    if status == StatusCode::UNAUTHORIZED {
        tracing::info!(%method, path = uri.path(), "backend rejected session");
    }
    let response_headers = copy_headers(upstream.headers(), &FORWARD_RESPONSE_HEADERS);
    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), "proxied");
    (status, response_headers, Body::from_stream(upstream.bytes_stream())).into_response()
}
