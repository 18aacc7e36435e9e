use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Event;

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}

/// Error body shape shared by both endpoints. Validation failures send
/// `message` as a list of strings.
#[derive(Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    message: Value,
}

impl ErrorBody {
    /// Server-provided message, or `None` when it is missing or blank.
    pub fn into_message(self) -> Option<String> {
        let text = match self.message {
            Value::String(text) => text,
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(","),
            _ => return None,
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Deserialize)]
pub struct EventsEnvelope {
    #[serde(default)]
    pub content: Option<Vec<Event>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body).unwrap().into_message()
    }

    #[test]
    fn error_message_accepts_text_and_lists() {
        assert_eq!(message_of(r#"{"message": "Usuário bloqueado"}"#).as_deref(), Some("Usuário bloqueado"));
        assert_eq!(
            message_of(r#"{"message": ["login must be a string", "password should not be empty"]}"#).as_deref(),
            Some("login must be a string,password should not be empty")
        );
    }

    #[test]
    fn blank_or_missing_error_message_is_none() {
        assert_eq!(message_of(r#"{"message": ""}"#), None);
        assert_eq!(message_of(r#"{"message": "   "}"#), None);
        assert_eq!(message_of(r#"{"message": []}"#), None);
        assert_eq!(message_of(r#"{"message": null}"#), None);
        assert_eq!(message_of(r#"{"error": "x"}"#), None);
    }
}
