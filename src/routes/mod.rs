pub mod answer;
pub mod challenge;
pub mod checkin;
pub mod config;
pub mod docs;
pub mod group;
pub mod health;
pub mod question;
pub mod room;

use axum::{
    extract::FromRequest,
    routing::{get, post},
    Router,
};

use crate::{error::Error, AppState};

/// JSON body extractor whose rejections go through [`Error`], so a missing or
/// mistyped field answers 400 `{"error": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

/// Collapses a write result into the `status` flag the API reports; failures
/// are logged and never escalate past the request.
pub fn write_status<T>(result: crate::error::Result<T>, action: &str) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(error = ?e, action, "write failed");
            false
        }
    }
}

/// Routes are declared without trailing slashes; the layer stack in
/// [`crate::app`] trims them from incoming requests.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/group/checkin", post(checkin::check_in))
        .route(
            "/api/group/checkin/:group_id/:room_id",
            get(checkin::get_check_in),
        )
        .route("/api/group/answer", post(answer::submit_answer))
        .route("/api/group/score/:group_id/:room_id", get(answer::get_score))
        .route("/api/group", post(group::create_group))
        .route(
            "/api/group/:group_id",
            get(group::get_group)
                .put(group::update_group)
                .patch(group::update_group),
        )
        .route("/api/groups", get(group::list_groups))
        .route("/api/room", post(room::create_room))
        .route(
            "/api/room/:room_id",
            get(room::get_room)
                .put(room::update_room)
                .patch(room::update_room),
        )
        .route("/api/rooms", get(room::list_rooms))
        .route("/api/room/qa", post(question::create_questions))
        .route("/api/room/qa/:room_id", get(question::list_questions))
        .route(
            "/api/room/qa/:room_id/:qa_id",
            get(question::get_question)
                .put(question::update_question)
                .patch(question::update_question),
        )
        .route(
            "/api/config",
            post(config::upsert_config)
                .put(config::upsert_config)
                .patch(config::upsert_config),
        )
        .route(
            "/api/config/:config_id",
            get(config::get_config)
                .put(config::update_config)
                .patch(config::update_config),
        )
        .route("/api/configs", get(config::list_configs))
        .route("/api/tools", get(challenge::list_tools))
        .route(
            "/api/challenge/1/answer",
            get(challenge::challenge_one_answer),
        )
        .route("/api/challenge/6", get(challenge::challenge_six_message))
        .route(
            "/api/challenge/6/answer",
            get(challenge::challenge_six_answer),
        )
        .route("/api/openapi.json", get(docs::openapi));

    Router::new()
        .route("/", get(health::index))
        .merge(api)
        .with_state(state)
}
