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
        question_dto::{CreateQuestionPayload, QuestionResponse, UpdateQuestionPayload},
    },
    error::Result,
    routes::write_status,
    utils::validation::{validate, validate_all},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/room/qa/",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Write attempted; `status` reports the outcome", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_questions(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OneOrMany<CreateQuestionPayload>>,
) -> Result<impl IntoResponse> {
    let items = payload.into_vec();
    validate_all(&items)?;
    let status = write_status(
        state.question_service.create(items).await,
        "create questions",
    );
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    put,
    path = "/api/room/qa/{room_id}/{qa_id}/",
    params(
        ("room_id" = Uuid, Path, description = "Room the question belongs to"),
        ("qa_id" = Uuid, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 201, description = "Write attempted; `status` is false when the question is not in the room", body = StatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path((room_id, qa_id)): Path<(Uuid, Uuid)>,
    AppJson(payload): AppJson<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let status = write_status(
        state.question_service.update(room_id, qa_id, payload).await,
        "update question",
    );
    Ok((StatusCode::CREATED, Json(StatusResponse { status })))
}

#[utoipa::path(
    get,
    path = "/api/room/qa/{room_id}/{qa_id}/",
    params(
        ("room_id" = Uuid, Path, description = "Room ID"),
        ("qa_id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found in room")
    )
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path((room_id, qa_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    let qa = state.question_service.get(room_id, qa_id).await?;
    Ok(Json(QuestionResponse::from(qa)))
}

#[utoipa::path(
    get,
    path = "/api/room/qa/{room_id}/",
    params(
        ("room_id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Questions of the room ordered by number", body = [QuestionResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let rows = state.question_service.list_for_room(room_id).await?;
    let body: Vec<QuestionResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(body))
}
