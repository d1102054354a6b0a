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
        group_dto::{CreateGroupPayload, GroupResponse, UpdateGroupPayload},
    },
    error::Result,
    routes::write_status,
    utils::validation::{validate, validate_all},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/group/",
    request_body = CreateGroupPayload,
    responses(
        (status = 201, description = "Write attempted; `status` reports the outcome", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_group(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OneOrMany<CreateGroupPayload>>,
) -> Result<impl IntoResponse> {
    let items = payload.into_vec();
    validate_all(&items)?;
    let status = write_status(state.group_service.create(items).await, "create group");
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    put,
    path = "/api/group/{group_id}/",
    params(
        ("group_id" = Uuid, Path, description = "Group ID")
    ),
    request_body = UpdateGroupPayload,
    responses(
        (status = 201, description = "Write attempted; `status` reports the outcome", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateGroupPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let status = write_status(state.group_service.update(group_id, payload).await, "update group");
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    get,
    path = "/api/group/{group_id}",
    params(
        ("group_id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group found", body = GroupResponse),
        (status = 404, description = "Group not found")
    )
)]
#[axum::debug_handler]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let group = state.group_service.get_by_id(group_id).await?;
    Ok(Json(GroupResponse::from(group)))
}

#[utoipa::path(
    get,
    path = "/api/groups/",
    responses(
        (status = 200, description = "All groups", body = [GroupResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_groups(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let groups = state.group_service.list().await?;
    let body: Vec<GroupResponse> = groups.into_iter().map(Into::into).collect();
    Ok(Json(body))
}
