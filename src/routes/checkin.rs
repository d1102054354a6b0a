use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use super::AppJson;

use crate::{
    dto::{
        checkin_dto::{CheckInPayload, CheckInResponse},
        common::StatusResponse,
    },
    error::Result,
    AppState,
};

/// Starts the group's clock in the room. A second check-in for the same pair
/// reports `status: false` and keeps the first timestamp.
#[utoipa::path(
    post,
    path = "/api/group/checkin/",
    request_body = CheckInPayload,
    responses(
        (status = 201, description = "Check-in attempted; `status` is false for duplicates", body = StatusResponse)
    )
)]
#[axum::debug_handler]
pub async fn check_in(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CheckInPayload>,
) -> Result<impl IntoResponse> {
    let status = match state
        .checkin_service
        .check_in(payload.group, payload.room)
        .await
    {
        Ok(created) => created.is_some(),
        Err(e) => {
            tracing::error!(error = ?e, group = %payload.group, room = %payload.room, "check in failed");
            false
        }
    };
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    get,
    path = "/api/group/checkin/{group_id}/{room_id}",
    params(
        ("group_id" = Uuid, Path, description = "Group ID"),
        ("room_id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Check-in found", body = CheckInResponse),
        (status = 204, description = "Group has not checked in")
    )
)]
#[axum::debug_handler]
pub async fn get_check_in(
    State(state): State<AppState>,
    Path((group_id, room_id)): Path<(Uuid, Uuid)>,
) -> Result<Response> {
    match state.checkin_service.find(group_id, room_id).await? {
        Some(checkin) => Ok(Json(CheckInResponse::from(checkin)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
