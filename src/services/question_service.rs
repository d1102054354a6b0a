use crate::dto::question_dto::{CreateQuestionPayload, UpdateQuestionPayload};
use crate::error::Result;
use crate::models::question_answer::QuestionAnswer;
use sqlx::PgPool;
use uuid::Uuid;

const COLUMNS: &str = "id, room_id, question_number, question_text, answer, num_points, created_at";

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payloads: Vec<CreateQuestionPayload>) -> Result<Vec<QuestionAnswer>> {
        let insert = format!(
            "INSERT INTO questions_answers (room_id, question_number, question_text, answer, num_points)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            COLUMNS
        );
        let mut tx = self.pool.begin().await?;
        let mut rows = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let row = sqlx::query_as::<_, QuestionAnswer>(&insert)
                .bind(payload.room)
                .bind(payload.question_number)
                .bind(payload.question_text)
                .bind(payload.answer)
                .bind(payload.num_points)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    /// Only touches the question if it belongs to `room_id`.
    pub async fn update(
        &self,
        room_id: Uuid,
        id: Uuid,
        payload: UpdateQuestionPayload,
    ) -> Result<QuestionAnswer> {
        let update = format!(
            "UPDATE questions_answers
             SET
                 question_number = COALESCE($3, question_number),
                 question_text = COALESCE($4, question_text),
                 answer = COALESCE($5, answer),
                 num_points = COALESCE($6, num_points)
             WHERE id = $1 AND room_id = $2
             RETURNING {}",
            COLUMNS
        );
        let row = sqlx::query_as::<_, QuestionAnswer>(&update)
            .bind(id)
            .bind(room_id)
            .bind(payload.question_number)
            .bind(payload.question_text)
            .bind(payload.answer)
            .bind(payload.num_points)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn get(&self, room_id: Uuid, id: Uuid) -> Result<QuestionAnswer> {
        let select = format!(
            "SELECT {} FROM questions_answers WHERE room_id = $1 AND id = $2",
            COLUMNS
        );
        let row = sqlx::query_as::<_, QuestionAnswer>(&select)
            .bind(room_id)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn list_for_room(&self, room_id: Uuid) -> Result<Vec<QuestionAnswer>> {
        let select = format!(
            "SELECT {} FROM questions_answers WHERE room_id = $1 ORDER BY question_number ASC",
            COLUMNS
        );
        let rows = sqlx::query_as::<_, QuestionAnswer>(&select)
            .bind(room_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
