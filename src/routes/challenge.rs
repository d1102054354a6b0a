use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{
    config::get_config,
    dto::challenge_dto::{ChallengeMessage, CodesQuery, PhoneQuery, Tool},
};

pub const TOOLS: [Tool; 8] = [
    Tool { id: 5, name: "ALAVANCA 1", country: "Brazil", code: "" },
    Tool { id: 8, name: "PICARETA ESTREITA", country: "Norway", code: "" },
    Tool { id: 3, name: "CAVADEIRA RETA", country: "Germany", code: "" },
    Tool { id: 6, name: "LANTERNA", country: "USA", code: "" },
    Tool { id: 1, name: "PICARETA CHIBANCA", country: "Japan", code: "" },
    Tool { id: 7, name: "ENXADA DUAS CARAS LARGA", country: "Finland", code: "" },
    Tool { id: 4, name: "TRADO SATO", country: "Kenya", code: "" },
    Tool { id: 2, name: "SACHO DUAS PONTAS", country: "Russia", code: "" },
];

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

/// Upper-cases and trims a query value; empty input counts as absent.
fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_uppercase())
        .filter(|v| !v.is_empty())
}

#[utoipa::path(
    get,
    path = "/api/tools/",
    responses(
        (status = 200, description = "Tool list used by the puzzles", body = [Tool])
    )
)]
#[axum::debug_handler]
pub async fn list_tools() -> impl IntoResponse {
    Json(TOOLS.to_vec())
}

#[utoipa::path(
    get,
    path = "/api/challenge/1/answer/",
    params(CodesQuery),
    responses(
        (status = 200, description = "Codes are right"),
        (status = 403, description = "Codes missing or wrong"),
        (status = 500, description = "Challenge not configured")
    )
)]
#[axum::debug_handler]
pub async fn challenge_one_answer(Query(query): Query<CodesQuery>) -> Response {
    let secrets = &get_config().challenges;
    let Some(expected) = normalized(secrets.response_codes_one.clone()) else {
        return message(StatusCode::INTERNAL_SERVER_ERROR, "response not found");
    };
    let Some(codes) = normalized(query.codes) else {
        return message(
            StatusCode::FORBIDDEN,
            "Informe sua resposta ex: codes=codigo1,codigo2",
        );
    };
    if codes != expected {
        return message(StatusCode::FORBIDDEN, "Resposta incorreta");
    }
    (
        StatusCode::OK,
        Json(json!({ "message": "Resposta correta", "codigo": secrets.code_ok })),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/challenge/6/",
    responses(
        (status = 200, description = "Challenge six prompt", body = ChallengeMessage)
    )
)]
#[axum::debug_handler]
pub async fn challenge_six_message() -> impl IntoResponse {
    let secrets = &get_config().challenges;
    Json(ChallengeMessage {
        possible: secrets.possible.clone(),
        message: secrets.message_six.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/api/challenge/6/answer/",
    params(PhoneQuery),
    responses(
        (status = 200, description = "Phone is right"),
        (status = 403, description = "Phone missing or wrong")
    )
)]
#[axum::debug_handler]
pub async fn challenge_six_answer(Query(query): Query<PhoneQuery>) -> Response {
    let Some(phone) = normalized(query.phone) else {
        return message(
            StatusCode::FORBIDDEN,
            "Informe sua resposta ex: ?phone=phone_found",
        );
    };
    let expected = &get_config().challenges.phone_ok;
    if expected.trim().is_empty() || phone != expected.trim().to_uppercase() {
        return message(StatusCode::FORBIDDEN, "Resposta incorreta");
    }
    (
        StatusCode::OK,
        Json(json!({ "message": "Resposta correta", "phone": expected })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_uppercases_and_drops_blank() {
        assert_eq!(normalized(Some(" ab,cd ".into())), Some("AB,CD".into()));
        assert_eq!(normalized(Some("   ".into())), None);
        assert_eq!(normalized(None), None);
    }

    #[test]
    fn tool_ids_are_unique() {
        let mut ids: Vec<i32> = TOOLS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TOOLS.len());
    }
}
