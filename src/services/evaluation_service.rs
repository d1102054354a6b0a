use chrono::{DateTime, Utc};

use crate::models::checkin::CheckIn;
use crate::models::configuration::ChallengeLimits;
use crate::models::group_answer::GroupAnswer;
use crate::models::question_answer::QuestionAnswer;

/// Everything the evaluator needs to judge one submission, loaded by the
/// caller inside the submission transaction.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationSnapshot<'a> {
    pub check_in: Option<&'a CheckIn>,
    pub limits: &'a ChallengeLimits,
    pub question: Option<&'a QuestionAnswer>,
    /// Prior submissions of the group for this room and question.
    pub history: &'a [GroupAnswer],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NotCheckedIn,
    TimeExpired,
    QuestionNotFound,
    AlreadySolved,
    AttemptsExhausted,
    Correct,
    Incorrect,
}

impl Verdict {
    /// Whether the submission must be appended to the answer log.
    pub fn records_attempt(self) -> bool {
        matches!(self, Verdict::Correct | Verdict::Incorrect)
    }
}

pub struct EvaluationService;

impl EvaluationService {
    /// Checks run in order: check-in, time window, question, already solved,
    /// attempt limit, then the answer itself.
    pub fn evaluate(
        snapshot: &EvaluationSnapshot<'_>,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Verdict {
        let Some(check_in) = snapshot.check_in else {
            return Verdict::NotCheckedIn;
        };
        if !snapshot.limits.within_time_window(check_in.checkin_dt, now) {
            return Verdict::TimeExpired;
        }
        let Some(question) = snapshot.question else {
            return Verdict::QuestionNotFound;
        };
        if Self::is_solved(question, snapshot.history) {
            return Verdict::AlreadySolved;
        }
        let wrong = Self::wrong_attempts(question, snapshot.history).count();
        if wrong >= snapshot.limits.max_wrong_attempts as usize {
            return Verdict::AttemptsExhausted;
        }
        if question.is_correct(submitted) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn is_solved(question: &QuestionAnswer, history: &[GroupAnswer]) -> bool {
        history
            .iter()
            .any(|a| a.question_id == question.id && question.is_correct(&a.answer))
    }

    /// Wrong submissions for `question`, in history order.
    pub fn wrong_attempts<'a>(
        question: &'a QuestionAnswer,
        history: &'a [GroupAnswer],
    ) -> impl Iterator<Item = &'a GroupAnswer> + 'a {
        history
            .iter()
            .filter(move |a| a.question_id == question.id && !question.is_correct(&a.answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    struct Fixture {
        check_in: CheckIn,
        question: QuestionAnswer,
        limits: ChallengeLimits,
        history: Vec<GroupAnswer>,
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 20, 1, 0, 0).unwrap()
    }

    impl Fixture {
        fn new() -> Self {
            let group_id = Uuid::new_v4();
            let room_id = Uuid::new_v4();
            Self {
                check_in: CheckIn {
                    id: Uuid::new_v4(),
                    group_id,
                    room_id,
                    checkin_dt: t0(),
                },
                question: QuestionAnswer {
                    id: Uuid::new_v4(),
                    room_id,
                    question_number: 1,
                    question_text: "Year the station opened?".into(),
                    answer: "1867".into(),
                    num_points: Decimal::from(5),
                    created_at: t0(),
                },
                limits: ChallengeLimits {
                    time_limit: Some(Duration::hours(2)),
                    max_wrong_attempts: 3,
                },
                history: Vec::new(),
            }
        }

        fn answered(mut self, answers: &[&str]) -> Self {
            for text in answers {
                self.history.push(GroupAnswer {
                    id: Uuid::new_v4(),
                    group_id: self.check_in.group_id,
                    room_id: self.check_in.room_id,
                    question_id: self.question.id,
                    answer: text.to_string(),
                    created_at: t0(),
                });
            }
            self
        }

        fn evaluate(&self, submitted: &str, now: DateTime<Utc>) -> Verdict {
            let snapshot = EvaluationSnapshot {
                check_in: Some(&self.check_in),
                limits: &self.limits,
                question: Some(&self.question),
                history: &self.history,
            };
            EvaluationService::evaluate(&snapshot, submitted, now)
        }
    }

    #[test]
    fn rejects_group_without_check_in() {
        let fx = Fixture::new();
        let snapshot = EvaluationSnapshot {
            check_in: None,
            limits: &fx.limits,
            question: Some(&fx.question),
            history: &[],
        };
        let verdict = EvaluationService::evaluate(&snapshot, "1867", t0());
        assert_eq!(verdict, Verdict::NotCheckedIn);
        assert!(!verdict.records_attempt());
    }

    #[test]
    fn wrong_answer_inside_window_is_recorded() {
        let fx = Fixture::new();
        let verdict = fx.evaluate("1900", t0() + Duration::hours(1));
        assert_eq!(verdict, Verdict::Incorrect);
        assert!(verdict.records_attempt());
    }

    #[test]
    fn expired_window_rejects_even_correct_answer() {
        let fx = Fixture::new();
        assert_eq!(fx.evaluate("1867", t0() + Duration::hours(3)), Verdict::TimeExpired);
        assert_eq!(fx.evaluate("nope", t0() + Duration::hours(3)), Verdict::TimeExpired);
    }

    #[test]
    fn time_check_precedes_question_lookup() {
        let fx = Fixture::new();
        let snapshot = EvaluationSnapshot {
            check_in: Some(&fx.check_in),
            limits: &fx.limits,
            question: None,
            history: &[],
        };
        let late = t0() + Duration::hours(5);
        assert_eq!(EvaluationService::evaluate(&snapshot, "x", late), Verdict::TimeExpired);
        assert_eq!(
            EvaluationService::evaluate(&snapshot, "x", t0()),
            Verdict::QuestionNotFound
        );
    }

    #[test]
    fn correct_after_some_wrong_attempts_succeeds() {
        let fx = Fixture::new().answered(&["1800", "1850"]);
        assert_eq!(fx.evaluate("1867", t0()), Verdict::Correct);
    }

    #[test]
    fn second_correct_submission_is_already_solved() {
        let fx = Fixture::new().answered(&["1800", "1867"]);
        assert_eq!(fx.evaluate("1867", t0()), Verdict::AlreadySolved);
        assert_eq!(fx.evaluate("1800", t0()), Verdict::AlreadySolved);
    }

    #[test]
    fn attempt_limit_blocks_correct_answer() {
        let fx = Fixture::new().answered(&["a", "b", "c"]);
        assert_eq!(fx.evaluate("1867", t0()), Verdict::AttemptsExhausted);
    }

    #[test]
    fn wrong_attempts_on_other_questions_do_not_count() {
        let mut fx = Fixture::new().answered(&["a", "b"]);
        let other_question = Uuid::new_v4();
        for text in ["x", "y", "z"] {
            fx.history.push(GroupAnswer {
                id: Uuid::new_v4(),
                group_id: fx.check_in.group_id,
                room_id: fx.check_in.room_id,
                question_id: other_question,
                answer: text.into(),
                created_at: t0(),
            });
        }
        assert_eq!(fx.evaluate("1867", t0()), Verdict::Correct);
        assert_eq!(
            EvaluationService::wrong_attempts(&fx.question, &fx.history).count(),
            2
        );
    }

    #[test]
    fn comparison_is_exact() {
        let fx = Fixture::new();
        assert_eq!(fx.evaluate(" 1867", t0()), Verdict::Incorrect);
    }

    #[test]
    fn zero_attempt_limit_refuses_everything() {
        let mut fx = Fixture::new();
        fx.limits.max_wrong_attempts = 0;
        assert_eq!(fx.evaluate("1867", t0()), Verdict::AttemptsExhausted);
    }
}
