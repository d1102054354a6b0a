use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::group_answer::GroupAnswer;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitAnswerRequest {
    pub room: Uuid,
    pub group: Uuid,
    /// Question number within the room.
    pub question: i32,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupAnswerResponse {
    pub id: Uuid,
    pub answer: String,
    pub question: Uuid,
    pub room: Uuid,
    pub group: Uuid,
}

impl From<GroupAnswer> for GroupAnswerResponse {
    fn from(answer: GroupAnswer) -> Self {
        Self {
            id: answer.id,
            answer: answer.answer,
            question: answer.question_id,
            room: answer.room_id,
            group: answer.group_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub group: Uuid,
    pub room: Uuid,
    pub solved_questions: usize,
    pub total_questions: usize,
    pub wrong_attempts: usize,
    pub points: Decimal,
    pub max_points: Decimal,
}
