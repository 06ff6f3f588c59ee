use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

use crate::{error::AppError, model::api::SuccessDto, state::AppState};

/// `GET /api/settings/{guild_id}` - returns the stored mapping for the
/// guild, or `{}` when nothing has been written yet.
pub async fn get_settings(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let document = state.settings.read(guild_id).await?;

    Ok(Json(document))
}

/// `POST /api/settings/{guild_id}` - replaces the guild's stored mapping
/// with the request body. Concurrent writers race last-writer-wins.
pub async fn update_settings(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Json(document): Json<Map<String, Value>>,
) -> Result<Json<SuccessDto>, AppError> {
    state.settings.write(guild_id, &document).await?;

    Ok(Json(SuccessDto { success: true }))
}
