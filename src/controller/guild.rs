use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serenity::all::GuildInfo;
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::session::AuthSession, service::guild::GuildAccessService,
    state::AppState,
};

/// `GET /api/guilds` - lists the guilds the session user can manage and the
/// bot is installed in.
///
/// The dashboard always consumes this endpoint as an array, so the
/// unauthenticated case answers 401 with an empty array rather than an
/// error object.
pub async fn list_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let Some(access_token) = AuthSession::new(&session).access_token().await? else {
        return Ok((StatusCode::UNAUTHORIZED, Json(Vec::<GuildInfo>::new())).into_response());
    };

    let guilds = GuildAccessService::new(&state.http_client, &state.discord_http)
        .list_manageable_guilds(&access_token)
        .await?;

    Ok(Json(guilds).into_response())
}
