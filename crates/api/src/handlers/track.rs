//! Handlers for the `/tracks` resource.
//!
//! Every handler goes through the injected [`TrackStore`] in [`AppState`];
//! storage failures bubble up as [`AppError::Database`] and become a
//! generic 500.
//!
//! [`TrackStore`]: music_library_db::repositories::TrackStore

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use music_library_core::error::CoreError;
use music_library_core::track::validate_track_payload;
use music_library_core::types::DbId;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Track", id })
}

/// GET /api/tracks
///
/// List all tracks in insertion order; an empty catalog yields `[]`.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tracks = state.tracks.list().await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let track = state.tracks.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(track))
}

/// POST /api/tracks
///
/// Validate the payload before touching storage, then insert.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let fields = validate_track_payload(&payload)?;
    let track = state.tracks.create(&fields).await?;
    tracing::info!(track_id = track.track_id, "Track created");
    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /api/tracks/{id}
///
/// Overwrite all fields of a track. The existence check runs before the body
/// is looked at, so an unknown id is a 404 even for a malformed payload.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    if state.tracks.find_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }

    let Json(payload) = payload?;
    let fields = validate_track_payload(&payload)?;

    // A concurrent delete can remove the row between the check and the write.
    let track = state
        .tracks
        .update(id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(track_id = id, "Track updated");
    Ok(Json(track))
}

/// DELETE /api/tracks/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let removed = state.tracks.delete(id).await?;
    if removed == 0 {
        return Err(not_found(id));
    }
    tracing::info!(track_id = id, "Track deleted");
    Ok(Json(MessageResponse::new(format!(
        "Track with id {id} deleted successfully"
    ))))
}
