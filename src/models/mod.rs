pub mod checkin;
pub mod configuration;
pub mod group;
pub mod group_answer;
pub mod question_answer;
pub mod room;
