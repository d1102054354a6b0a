pub mod answer_dto;
pub mod challenge_dto;
pub mod checkin_dto;
pub mod common;
pub mod config_dto;
pub mod group_dto;
pub mod question_dto;
pub mod room_dto;
