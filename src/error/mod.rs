//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by request handlers. It
//! wraps the domain-specific errors and implements `IntoResponse` so
//! handlers can use `?` throughout. Provider and storage error detail is
//! logged server-side and never included in a client-visible response.

pub mod auth;
pub mod config;
pub mod discord;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, discord::DiscordApiError},
    model::api::ErrorDto,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, mapped to its own status code (401).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Discord API call failure (remote rejection or transport failure).
    #[error(transparent)]
    DiscordErr(#[from] DiscordApiError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Settings file unreadable or unwritable.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Stored settings document could not be serialized or deserialized.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// A constant endpoint URL failed to parse; only reachable if the
    /// compiled-in Discord endpoints are edited into something invalid.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),
}

/// Converts application errors into HTTP responses.
///
/// Authentication errors carry their own status mapping; everything else is
/// logged with full detail and surfaced as a generic 500 so provider error
/// payloads never leak to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body, logging the underlying error for diagnostics.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
