use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create endpoints accept either a single object or a JSON array of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Outcome of a write: `false` when the store rejected it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MessageCode {
    /// Group has not checked into the room.
    #[serde(rename = "GNC203")]
    NotCheckedIn,
    /// Time window since check-in has elapsed.
    #[serde(rename = "GTT503")]
    TimeExpired,
    /// Question number does not exist in the room.
    #[serde(rename = "QNF500")]
    QuestionNotFound,
    /// Wrong-attempt limit reached.
    #[serde(rename = "GTO503")]
    AttemptsExhausted,
    /// Submission could not be stored.
    #[serde(rename = "NIE500")]
    NotInserted,
    /// Question was already answered correctly.
    #[serde(rename = "GAO302")]
    AlreadySolved,
    /// Submission was correct.
    #[serde(rename = "GTS201")]
    Solved,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageCodeResponse {
    pub message_code: MessageCode,
}

impl From<MessageCode> for MessageCodeResponse {
    fn from(message_code: MessageCode) -> Self {
        Self { message_code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn accepts_single_object() {
        let parsed: OneOrMany<Item> = serde_json::from_value(json!({"name": "a"})).unwrap();
        assert_eq!(parsed.into_vec(), vec![Item { name: "a".into() }]);
    }

    #[test]
    fn accepts_array() {
        let parsed: OneOrMany<Item> =
            serde_json::from_value(json!([{"name": "a"}, {"name": "b"}])).unwrap();
        assert_eq!(parsed.into_vec().len(), 2);
    }

    #[test]
    fn message_codes_serialize_to_wire_names() {
        let body = serde_json::to_value(MessageCodeResponse::from(MessageCode::AlreadySolved)).unwrap();
        assert_eq!(body, json!({"message_code": "GAO302"}));
    }
}
