use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::session::AuthSession,
    model::api::{AuthUrlDto, SuccessDto},
    service::oauth::DiscordAuthService,
    state::AppState,
};

/// Request body for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackDto {
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

/// `GET /auth/discord` - returns the authorization URL the dashboard sends
/// the browser to. Construction cannot fail.
pub async fn login(State(state): State<AppState>) -> Json<AuthUrlDto> {
    let auth_service = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_http,
    );

    Json(AuthUrlDto {
        auth_url: auth_service.login_url().to_string(),
    })
}

/// `POST /auth/callback` - completes the OAuth exchange and establishes the
/// session. The access token is stored server-side only and never appears in
/// the response body.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CallbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_http,
    );

    let (user, access_token) = auth_service.callback(payload.code).await?;

    AuthSession::new(&session)
        .establish(&user, &access_token)
        .await?;

    Ok(Json(SuccessDto { success: true }))
}

/// `GET /api/me` - returns the session user's profile, or 401 when the
/// request carries no valid session.
pub async fn me(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthSession::new(&session).require_user().await?;

    Ok(Json(user))
}
