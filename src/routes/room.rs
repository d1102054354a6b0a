use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use super::AppJson;

use crate::{
    dto::{
        common::{OneOrMany, StatusResponse},
        room_dto::{CreateRoomPayload, RoomResponse, UpdateRoomPayload},
    },
    error::Result,
    routes::write_status,
    utils::validation::{validate, validate_all},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/room/",
    request_body = CreateRoomPayload,
    responses(
        (status = 201, description = "Write attempted; `status` reports the outcome", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_room(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OneOrMany<CreateRoomPayload>>,
) -> Result<impl IntoResponse> {
    let items = payload.into_vec();
    validate_all(&items)?;
    let status = write_status(state.room_service.create(items).await, "create room");
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    put,
    path = "/api/room/{room_id}/",
    params(
        ("room_id" = Uuid, Path, description = "Room ID")
    ),
    request_body = UpdateRoomPayload,
    responses(
        (status = 201, description = "Write attempted; `status` reports the outcome", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn update_room(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateRoomPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let status = write_status(state.room_service.update(room_id, payload).await, "update room");
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    get,
    path = "/api/room/{room_id}",
    params(
        ("room_id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room not found")
    )
)]
#[axum::debug_handler]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let room = state.room_service.get_by_id(room_id).await?;
    Ok(Json(RoomResponse::from(room)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/",
    responses(
        (status = 200, description = "All rooms", body = [RoomResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rooms = state.room_service.list().await?;
    let body: Vec<RoomResponse> = rooms.into_iter().map(Into::into).collect();
    Ok(Json(body))
}
