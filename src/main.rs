mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let discord_http = Arc::new(Http::new(&config.discord_bot_token));
    let settings = startup::setup_settings_store(&config).await?;

    let session_layer = startup::setup_session_layer(&config)?;
    let cors_layer = startup::setup_cors_layer(&config)?;

    let app = router::router()
        .with_state(AppState::new(
            http_client,
            oauth_client,
            discord_http,
            settings,
        ))
        .layer(session_layer)
        .layer(cors_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
