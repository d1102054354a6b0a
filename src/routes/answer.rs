use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use super::AppJson;

use crate::{
    dto::{
        answer_dto::{GroupAnswerResponse, ScoreResponse, SubmitAnswerRequest},
        common::{MessageCode, MessageCodeResponse},
    },
    error::Result,
    services::{answer_service::SubmissionOutcome, evaluation_service::Verdict},
    utils::validation::validate,
    AppState,
};

/// Status and code sent back for a verdict that ends the request without a
/// list body.
pub fn verdict_reply(verdict: Verdict) -> Option<(StatusCode, MessageCode)> {
    match verdict {
        Verdict::NotCheckedIn => Some((
            StatusCode::NON_AUTHORITATIVE_INFORMATION,
            MessageCode::NotCheckedIn,
        )),
        Verdict::TimeExpired => Some((StatusCode::SERVICE_UNAVAILABLE, MessageCode::TimeExpired)),
        Verdict::QuestionNotFound => Some((
            StatusCode::INTERNAL_SERVER_ERROR,
            MessageCode::QuestionNotFound,
        )),
        Verdict::AttemptsExhausted => Some((
            StatusCode::SERVICE_UNAVAILABLE,
            MessageCode::AttemptsExhausted,
        )),
        Verdict::AlreadySolved => Some((StatusCode::FOUND, MessageCode::AlreadySolved)),
        Verdict::Correct => Some((StatusCode::CREATED, MessageCode::Solved)),
        Verdict::Incorrect => None,
    }
}

fn coded(status: StatusCode, code: MessageCode) -> Response {
    (status, Json(MessageCodeResponse::from(code))).into_response()
}

pub fn outcome_response(outcome: SubmissionOutcome) -> Response {
    match outcome {
        SubmissionOutcome::Rejected(verdict) => match verdict_reply(verdict) {
            Some((status, code)) => coded(status, code),
            // Incorrect answers are always recorded, never rejected.
            None => coded(StatusCode::INTERNAL_SERVER_ERROR, MessageCode::NotInserted),
        },
        SubmissionOutcome::Solved => coded(StatusCode::CREATED, MessageCode::Solved),
        SubmissionOutcome::NotRecorded => {
            coded(StatusCode::INTERNAL_SERVER_ERROR, MessageCode::NotInserted)
        }
        SubmissionOutcome::Incorrect(wrong) => {
            let body: Vec<GroupAnswerResponse> = wrong.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/group/answer/",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, description = "Wrong answer; all wrong attempts for the question", body = [GroupAnswerResponse]),
        (status = 201, description = "Correct answer (GTS201)", body = MessageCodeResponse),
        (status = 203, description = "Group has not checked into the room (GNC203)", body = MessageCodeResponse),
        (status = 302, description = "Question already solved (GAO302)", body = MessageCodeResponse),
        (status = 400, description = "Invalid payload"),
        (status = 500, description = "Question not found (QNF500) or answer not stored (NIE500)", body = MessageCodeResponse),
        (status = 503, description = "Time expired (GTT503) or attempts exhausted (GTO503)", body = MessageCodeResponse)
    )
)]
#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    AppJson(req): AppJson<SubmitAnswerRequest>,
) -> Result<Response> {
    validate(&req)?;
    let outcome = state.answer_service.submit(&req).await?;
    Ok(outcome_response(outcome))
}

#[utoipa::path(
    get,
    path = "/api/group/score/{group_id}/{room_id}",
    params(
        ("group_id" = Uuid, Path, description = "Group ID"),
        ("room_id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Points earned by the group in the room", body = ScoreResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_score(
    State(state): State<AppState>,
    Path((group_id, room_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    let score = state.score_service.score(group_id, room_id).await?;
    Ok(Json(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::group_answer::GroupAnswer;
    use axum::body::to_bytes;
    use serde_json::Value as JsonValue;

    async fn body_json(resp: Response) -> JsonValue {
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn rejections_carry_wire_codes() {
        let cases = [
            (Verdict::NotCheckedIn, 203, "GNC203"),
            (Verdict::TimeExpired, 503, "GTT503"),
            (Verdict::QuestionNotFound, 500, "QNF500"),
            (Verdict::AttemptsExhausted, 503, "GTO503"),
            (Verdict::AlreadySolved, 302, "GAO302"),
        ];
        for (verdict, status, code) in cases {
            let resp = outcome_response(SubmissionOutcome::Rejected(verdict));
            assert_eq!(resp.status().as_u16(), status, "{:?}", verdict);
            assert_eq!(body_json(resp).await["message_code"], code);
        }
    }

    #[tokio::test]
    async fn solved_and_not_recorded() {
        let resp = outcome_response(SubmissionOutcome::Solved);
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await["message_code"], "GTS201");

        let resp = outcome_response(SubmissionOutcome::NotRecorded);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["message_code"], "NIE500");
    }

    #[tokio::test]
    async fn incorrect_lists_wrong_answers() {
        let row = GroupAnswer {
            id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            question_id: Uuid::new_v4(),
            answer: "left".into(),
            created_at: chrono::Utc::now(),
        };
        let resp = outcome_response(SubmissionOutcome::Incorrect(vec![row.clone()]));
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body[0]["answer"], "left");
        assert_eq!(body[0]["question"], row.question_id.to_string());
        assert_eq!(body[0]["group"], row.group_id.to_string());
    }

    #[test]
    fn incorrect_has_no_coded_reply() {
        assert!(verdict_reply(Verdict::Incorrect).is_none());
    }
}
