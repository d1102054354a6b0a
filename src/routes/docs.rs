use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    answer_dto::{GroupAnswerResponse, ScoreResponse, SubmitAnswerRequest},
    challenge_dto::{ChallengeMessage, Tool},
    checkin_dto::{CheckInPayload, CheckInResponse},
    common::{MessageCode, MessageCodeResponse, StatusResponse},
    config_dto::{ConfigPayload, ConfigResponse, UpdateConfigPayload},
    group_dto::{CreateGroupPayload, GroupResponse, UpdateGroupPayload},
    question_dto::{CreateQuestionPayload, QuestionResponse, UpdateQuestionPayload},
    room_dto::{CreateRoomPayload, RoomResponse, UpdateRoomPayload},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::index,
        crate::routes::checkin::check_in,
        crate::routes::checkin::get_check_in,
        crate::routes::answer::submit_answer,
        crate::routes::answer::get_score,
        crate::routes::config::upsert_config,
        crate::routes::config::update_config,
        crate::routes::config::get_config,
        crate::routes::config::list_configs,
        crate::routes::group::create_group,
        crate::routes::group::update_group,
        crate::routes::group::get_group,
        crate::routes::group::list_groups,
        crate::routes::room::create_room,
        crate::routes::room::update_room,
        crate::routes::room::get_room,
        crate::routes::room::list_rooms,
        crate::routes::question::create_questions,
        crate::routes::question::update_question,
        crate::routes::question::get_question,
        crate::routes::question::list_questions,
        crate::routes::challenge::list_tools,
        crate::routes::challenge::challenge_one_answer,
        crate::routes::challenge::challenge_six_message,
        crate::routes::challenge::challenge_six_answer,
    ),
    components(schemas(
        StatusResponse,
        MessageCode,
        MessageCodeResponse,
        CheckInPayload,
        CheckInResponse,
        SubmitAnswerRequest,
        GroupAnswerResponse,
        ScoreResponse,
        ConfigPayload,
        UpdateConfigPayload,
        ConfigResponse,
        CreateGroupPayload,
        UpdateGroupPayload,
        GroupResponse,
        CreateRoomPayload,
        UpdateRoomPayload,
        RoomResponse,
        CreateQuestionPayload,
        UpdateQuestionPayload,
        QuestionResponse,
        Tool,
        ChallengeMessage,
    )),
    info(title = "checkin-backend", description = "Rooms, groups, check-ins and answer evaluation")
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
