pub mod answer_service;
pub mod checkin_service;
pub mod config_service;
pub mod evaluation_service;
pub mod group_service;
pub mod question_service;
pub mod room_service;
pub mod score_service;
