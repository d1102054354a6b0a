use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::answer_dto::SubmitAnswerRequest;
use crate::error::Result;
use crate::models::checkin::CheckIn;
use crate::models::configuration::{ChallengeLimits, ConfigKey, Configuration};
use crate::models::group_answer::GroupAnswer;
use crate::models::question_answer::QuestionAnswer;
use crate::services::evaluation_service::{EvaluationService, EvaluationSnapshot, Verdict};
use crate::utils::time;

#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Refused before anything was written.
    Rejected(Verdict),
    /// The submitted answer was right.
    Solved,
    /// Wrong answer; every wrong attempt for the question, oldest first,
    /// including the one just stored.
    Incorrect(Vec<GroupAnswer>),
    /// The attempt passed all checks but could not be stored.
    NotRecorded,
}

#[derive(Clone)]
pub struct AnswerService {
    pool: PgPool,
    default_attempt_limit: u32,
}

impl AnswerService {
    pub fn new(pool: PgPool, default_attempt_limit: u32) -> Self {
        Self {
            pool,
            default_attempt_limit,
        }
    }

    pub async fn submit(&self, req: &SubmitAnswerRequest) -> Result<SubmissionOutcome> {
        self.submit_at(req, time::now()).await
    }

    /// Runs one submission in a single transaction. The check-in row is
    /// locked first, so submissions from the same group in the same room are
    /// serialized and the attempt count cannot be raced past its limit.
    pub async fn submit_at(
        &self,
        req: &SubmitAnswerRequest,
        now: DateTime<Utc>,
    ) -> Result<SubmissionOutcome> {
        let mut tx = self.pool.begin().await?;

        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, group_id, room_id, checkin_dt
            FROM checkins
            WHERE group_id = $1 AND room_id = $2
            FOR UPDATE
            "#,
        )
        .bind(req.group)
        .bind(req.room)
        .fetch_optional(&mut *tx)
        .await?;

        if check_in.is_none() {
            tracing::info!(group = %req.group, room = %req.room, "answer from group that has not checked in");
            tx.rollback().await?;
            return Ok(SubmissionOutcome::Rejected(Verdict::NotCheckedIn));
        }

        let configs = sqlx::query_as::<_, Configuration>(
            r#"
            SELECT id, config_name, challenge_limit, created_at
            FROM config
            WHERE config_name IN ($1, $2)
            "#,
        )
        .bind(ConfigKey::TimeLimit.as_str())
        .bind(ConfigKey::AnswerAttemptLimit.as_str())
        .fetch_all(&mut *tx)
        .await?;
        let limits = ChallengeLimits::from_configurations(&configs, self.default_attempt_limit);

        let question = sqlx::query_as::<_, QuestionAnswer>(
            r#"
            SELECT id, room_id, question_number, question_text, answer, num_points, created_at
            FROM questions_answers
            WHERE room_id = $1 AND question_number = $2
            "#,
        )
        .bind(req.room)
        .bind(req.question)
        .fetch_optional(&mut *tx)
        .await?;

        let history = match &question {
            Some(q) => Self::history(&mut tx, req.group, req.room, q.id).await?,
            None => Vec::new(),
        };

        let snapshot = EvaluationSnapshot {
            check_in: check_in.as_ref(),
            limits: &limits,
            question: question.as_ref(),
            history: &history,
        };
        let verdict = EvaluationService::evaluate(&snapshot, &req.answer, now);

        let question = match question {
            Some(q) if verdict.records_attempt() => q,
            _ => {
                tracing::info!(
                    group = %req.group,
                    room = %req.room,
                    question = req.question,
                    ?verdict,
                    "answer rejected"
                );
                tx.rollback().await?;
                return Ok(SubmissionOutcome::Rejected(verdict));
            }
        };

        let inserted = sqlx::query_as::<_, GroupAnswer>(
            r#"
            INSERT INTO group_answers (group_id, room_id, question_id, answer, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, group_id, room_id, question_id, answer, created_at
            "#,
        )
        .bind(req.group)
        .bind(req.room)
        .bind(question.id)
        .bind(&req.answer)
        .bind(now)
        .fetch_one(&mut *tx)
        .await;

        let stored = match inserted {
            Ok(row) => row,
            Err(e) => {
                tracing::error!(error = ?e, group = %req.group, room = %req.room, "failed to store answer");
                return Ok(SubmissionOutcome::NotRecorded);
            }
        };
        if let Err(e) = tx.commit().await {
            tracing::error!(error = ?e, "failed to commit answer");
            return Ok(SubmissionOutcome::NotRecorded);
        }

        if verdict == Verdict::Correct {
            tracing::info!(group = %req.group, room = %req.room, question = req.question, "question solved");
            return Ok(SubmissionOutcome::Solved);
        }

        let mut wrong: Vec<GroupAnswer> = EvaluationService::wrong_attempts(&question, &history)
            .cloned()
            .collect();
        wrong.push(stored);
        Ok(SubmissionOutcome::Incorrect(wrong))
    }

    async fn history(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        group_id: Uuid,
        room_id: Uuid,
        question_id: Uuid,
    ) -> Result<Vec<GroupAnswer>> {
        let rows = sqlx::query_as::<_, GroupAnswer>(
            r#"
            SELECT id, group_id, room_id, question_id, answer, created_at
            FROM group_answers
            WHERE group_id = $1 AND room_id = $2 AND question_id = $3
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(group_id)
        .bind(room_id)
        .bind(question_id)
        .fetch_all(&mut **tx)
        .await?;
        Ok(rows)
    }
}
