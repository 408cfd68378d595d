#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    tracing::info!(backend = %config.backend_url, timeout_secs = config.request_timeout_secs, "backend proxy configured");

    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "inbox-triage listening");
    axum::serve(listener, app).await?;
    Ok(())
}
