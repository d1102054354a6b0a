use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionAnswer {
    pub id: Uuid,
    pub room_id: Uuid,
    pub question_number: i32,
    pub question_text: String,
    pub answer: String,
    pub num_points: Decimal,
    pub created_at: DateTime<Utc>,
}

impl QuestionAnswer {
    /// Exact, case-sensitive comparison against the stored answer.
    pub fn is_correct(&self, submitted: &str) -> bool {
        self.answer == submitted
    }
}
