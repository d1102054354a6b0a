use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One logged submission. Rows are append-only; whether an attempt was right
/// is decided by comparing `answer` with the question at read time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GroupAnswer {
    pub id: Uuid,
    pub group_id: Uuid,
    pub room_id: Uuid,
    pub question_id: Uuid,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}
