use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::question_answer::QuestionAnswer;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    pub room: Uuid,
    #[validate(range(min = 1))]
    pub question_number: i32,
    #[validate(length(min = 1, max = 200))]
    pub question_text: String,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
    #[validate(custom(function = "non_negative_points"))]
    pub num_points: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_question_update"))]
pub struct UpdateQuestionPayload {
    #[validate(range(min = 1))]
    pub question_number: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub question_text: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub answer: Option<String>,
    pub num_points: Option<Decimal>,
}

fn non_negative_points(points: &Decimal) -> Result<(), ValidationError> {
    if points.is_sign_negative() && !points.is_zero() {
        return Err(ValidationError::new("negative_points"));
    }
    Ok(())
}

fn validate_question_update(payload: &UpdateQuestionPayload) -> Result<(), ValidationError> {
    match payload.num_points.as_ref() {
        Some(points) => non_negative_points(points),
        None => Ok(()),
    }
}

/// Public view of a question; the correct answer is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub question_number: i32,
    pub question_text: String,
    pub num_points: Decimal,
}

impl From<QuestionAnswer> for QuestionResponse {
    fn from(qa: QuestionAnswer) -> Self {
        Self {
            id: qa.id,
            question_number: qa.question_number,
            question_text: qa.question_text,
            num_points: qa.num_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn payload(points: &str) -> CreateQuestionPayload {
        CreateQuestionPayload {
            room: Uuid::new_v4(),
            question_number: 1,
            question_text: "Where is the key?".into(),
            answer: "under the mat".into(),
            num_points: Decimal::from_str(points).unwrap(),
        }
    }

    #[test]
    fn accepts_positive_and_zero_points() {
        assert!(payload("5").validate().is_ok());
        assert!(payload("0").validate().is_ok());
    }

    #[test]
    fn rejects_negative_points() {
        assert!(payload("-1.5").validate().is_err());
    }

    #[test]
    fn update_checks_points_only_when_present() {
        let mut update = UpdateQuestionPayload {
            question_number: None,
            question_text: None,
            answer: None,
            num_points: None,
        };
        assert!(update.validate().is_ok());
        update.num_points = Some(Decimal::from(-2));
        assert!(update.validate().is_err());
    }

    #[test]
    fn response_hides_answer() {
        let qa = QuestionAnswer {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            question_number: 3,
            question_text: "Colour of the door?".into(),
            answer: "blue".into(),
            num_points: Decimal::from(2),
            created_at: chrono::Utc::now(),
        };
        let body = serde_json::to_value(QuestionResponse::from(qa)).unwrap();
        assert!(body.get("answer").is_none());
        assert_eq!(body["question_number"], 3);
    }
}
