use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use common::types::{Created, Message};
use models::singer::Singer;
use service::singers::domain::{AddSingerInput, AddSongsInput, RenameInput};

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/singers", tag = "singers",
    request_body = crate::openapi::AddSingerRequest,
    responses(
        (status = 200, description = "Singer added", body = crate::openapi::CreatedResponse),
        (status = 400, description = "Name is required", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn add_singer(
    State(state): State<ServerState>,
    payload: Result<Json<AddSingerInput>, JsonRejection>,
) -> Result<Json<Created>, ApiError> {
    let Json(input) = payload?;
    let id = state.singers.add(input).await?;
    Ok(Json(Created { message: "Singer added".into(), id: id.to_string() }))
}

#[utoipa::path(
    get, path = "/singers", tag = "singers",
    responses(
        (status = 200, description = "All singers", body = [crate::openapi::SingerResponse]),
        (status = 400, description = "Store error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list_singers(State(state): State<ServerState>) -> Result<Json<Vec<Singer>>, ApiError> {
    Ok(Json(state.singers.list().await?))
}

#[utoipa::path(
    get, path = "/singers/{id}", tag = "singers",
    params(("id" = String, Path, description = "Singer id")),
    responses(
        (status = 200, description = "Singer found", body = crate::openapi::SingerResponse),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Singer not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_singer(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Singer>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.singers.get(&id).await?))
}

#[utoipa::path(
    get, path = "/singers/{id}/songs", tag = "singers",
    params(("id" = String, Path, description = "Singer id")),
    responses(
        (status = 200, description = "Songs of the singer", body = [String]),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Singer not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_singer_songs(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.singers.songs(&id).await?))
}

#[utoipa::path(
    put, path = "/singers/{id}/name", tag = "singers",
    params(("id" = String, Path, description = "Singer id")),
    request_body = crate::openapi::RenameRequest,
    responses(
        (status = 200, description = "Singer name updated", body = crate::openapi::MessageResponse),
        (status = 400, description = "Name is required or malformed id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Singer not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update_singer_name(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<RenameInput>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    state.singers.rename(&id, input).await?;
    Ok(Json(Message::new("Singer name updated")))
}

/// Appends songs; titles already present are skipped.
#[utoipa::path(
    put, path = "/singers/{id}", tag = "singers",
    params(("id" = String, Path, description = "Singer id")),
    request_body = crate::openapi::AddSongsRequest,
    responses(
        (status = 200, description = "Singer updated", body = crate::openapi::MessageResponse),
        (status = 400, description = "Songs are required or malformed id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Singer not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update_singer_songs(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<AddSongsInput>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    state.singers.add_songs(&id, input).await?;
    Ok(Json(Message::new("Singer updated")))
}

#[utoipa::path(
    delete, path = "/singers/{id}", tag = "singers",
    params(("id" = String, Path, description = "Singer id")),
    responses(
        (status = 200, description = "Singer deleted", body = crate::openapi::MessageResponse),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Singer not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete_singer(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = path?;
    state.singers.delete(&id).await?;
    Ok(Json(Message::new("Singer deleted")))
}

#[utoipa::path(
    delete, path = "/singers/{id}/songs/{song}", tag = "singers",
    params(
        ("id" = String, Path, description = "Singer id"),
        ("song" = String, Path, description = "Exact song title")
    ),
    responses(
        (status = 200, description = "Song deleted successfully", body = crate::openapi::MessageResponse),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Singer or song not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete_song(
    State(state): State<ServerState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path((id, song)) = path?;
    state.singers.delete_song(&id, &song).await?;
    Ok(Json(Message::new("Song deleted successfully")))
}
