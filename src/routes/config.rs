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
        config_dto::{ConfigPayload, ConfigResponse, UpdateConfigPayload},
    },
    error::Result,
    routes::write_status,
    utils::validation::{validate, validate_all},
    AppState,
};

/// Values are keyed by name: posting an existing `config_name` replaces its
/// limit. Known names are `settimelimit` (hours) and `limitanswersatt`.
#[utoipa::path(
    post,
    path = "/api/config/",
    request_body = ConfigPayload,
    responses(
        (status = 201, description = "Write attempted; `status` reports the outcome", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn upsert_config(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OneOrMany<ConfigPayload>>,
) -> Result<impl IntoResponse> {
    let items = payload.into_vec();
    validate_all(&items)?;
    let status = write_status(state.config_service.upsert(items).await, "upsert config");
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    put,
    path = "/api/config/{config_id}/",
    params(
        ("config_id" = Uuid, Path, description = "Configuration ID")
    ),
    request_body = UpdateConfigPayload,
    responses(
        (status = 201, description = "Write attempted; `status` reports the outcome", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn update_config(
    State(state): State<AppState>,
    Path(config_id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateConfigPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let status = write_status(
        state.config_service.update(config_id, payload).await,
        "update config",
    );
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    get,
    path = "/api/config/{config_id}",
    params(
        ("config_id" = Uuid, Path, description = "Configuration ID")
    ),
    responses(
        (status = 200, description = "Configuration found", body = ConfigResponse),
        (status = 404, description = "Configuration not found")
    )
)]
#[axum::debug_handler]
pub async fn get_config(
    State(state): State<AppState>,
    Path(config_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let row = state.config_service.get_by_id(config_id).await?;
    Ok(Json(ConfigResponse::from(row)))
}

#[utoipa::path(
    get,
    path = "/api/configs/",
    responses(
        (status = 200, description = "All configuration values", body = [ConfigResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_configs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.config_service.list().await?;
    let body: Vec<ConfigResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(body))
}
