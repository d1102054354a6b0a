pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    answer_service::AnswerService, checkin_service::CheckInService,
    config_service::ConfigService, group_service::GroupService,
    question_service::QuestionService, room_service::RoomService, score_service::ScoreService,
};
use axum::Router;
use sqlx::PgPool;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub room_service: RoomService,
    pub group_service: GroupService,
    pub config_service: ConfigService,
    pub checkin_service: CheckInService,
    pub question_service: QuestionService,
    pub answer_service: AnswerService,
    pub score_service: ScoreService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        Self {
            room_service: RoomService::new(pool.clone()),
            group_service: GroupService::new(pool.clone()),
            config_service: ConfigService::new(pool.clone()),
            checkin_service: CheckInService::new(pool.clone()),
            question_service: QuestionService::new(pool.clone()),
            answer_service: AnswerService::new(pool.clone(), config.default_attempt_limit),
            score_service: ScoreService::new(pool),
        }
    }
}

/// Full HTTP service: routes plus permissive CORS and tracing, with trailing
/// slashes trimmed before routing so `/api/rooms` and `/api/rooms/` are the same.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
