use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::answer_dto::ScoreResponse;
use crate::error::Result;
use crate::models::group_answer::GroupAnswer;
use crate::models::question_answer::QuestionAnswer;
use crate::services::evaluation_service::EvaluationService;
use crate::services::question_service::QuestionService;

#[derive(Clone)]
pub struct ScoreService {
    pool: PgPool,
    questions: QuestionService,
}

impl ScoreService {
    pub fn new(pool: PgPool) -> Self {
        let questions = QuestionService::new(pool.clone());
        Self { pool, questions }
    }

    pub async fn score(&self, group_id: Uuid, room_id: Uuid) -> Result<ScoreResponse> {
        let questions = self.questions.list_for_room(room_id).await?;
        let answers = sqlx::query_as::<_, GroupAnswer>(
            r#"
            SELECT id, group_id, room_id, question_id, answer, created_at
            FROM group_answers
            WHERE group_id = $1 AND room_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(group_id)
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Self::summarize(group_id, room_id, &questions, &answers))
    }

    /// A question counts as solved once any logged answer matches it.
    pub fn summarize(
        group_id: Uuid,
        room_id: Uuid,
        questions: &[QuestionAnswer],
        answers: &[GroupAnswer],
    ) -> ScoreResponse {
        let mut solved_questions = 0;
        let mut wrong_attempts = 0;
        let mut points = Decimal::ZERO;
        let mut max_points = Decimal::ZERO;

        for q in questions {
            max_points += q.num_points;
            if EvaluationService::is_solved(q, answers) {
                solved_questions += 1;
                points += q.num_points;
            }
            wrong_attempts += EvaluationService::wrong_attempts(q, answers).count();
        }

        ScoreResponse {
            group: group_id,
            room: room_id,
            solved_questions,
            total_questions: questions.len(),
            wrong_attempts,
            points,
            max_points,
        }
    }
}
