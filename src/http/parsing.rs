use serde_json::{Map, Value};

use crate::logging::sanitize_log_message;
use crate::model::types::{ChatCompletionRequest, ChatMessage, EmbeddingInput, EmbeddingRequest};

/// Request types that can be assembled field by field from a JSON object.
///
/// A field of the wrong type reads as absent and is reported through
/// `issues`; the remaining fields are kept.
pub trait LenientRequest: Default {
    fn from_json_fields(fields: &Map<String, Value>, issues: &mut Vec<String>) -> Self;
}

/// Parses a request body without ever rejecting it.
///
/// An empty body, invalid JSON or a non-object value yields `T::default()`;
/// a malformed field only loses that field. Both cases are logged.
pub fn parse_lenient_body<T: LenientRequest>(endpoint: &str, body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        log::warn!(
            "empty {} request body, continuing with default values",
            endpoint
        );
        return T::default();
    }

    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            log::warn!(
                "malformed {} request: {}. continuing with default values",
                endpoint,
                sanitize_log_message(&e.to_string())
            );
            return T::default();
        }
    };

    let Some(fields) = value.as_object() else {
        log::warn!(
            "{} request body is a JSON {}, not an object. continuing with default values",
            endpoint,
            json_type(&value)
        );
        return T::default();
    };

    let mut issues = Vec::new();
    let request = T::from_json_fields(fields, &mut issues);
    if !issues.is_empty() {
        log::warn!(
            "malformed {} request fields: {}. continuing with default values for them",
            endpoint,
            sanitize_log_message(&issues.join(", "))
        );
    }
    request
}

impl LenientRequest for ChatCompletionRequest {
    fn from_json_fields(fields: &Map<String, Value>, issues: &mut Vec<String>) -> Self {
        let model = string_field(fields, "model", "model", issues);

        let messages = match fields.get("messages") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| chat_message(index, item, issues))
                    .collect(),
            ),
            Some(other) => {
                issues.push(format!("messages ({})", json_type(other)));
                None
            }
        };

        Self { model, messages }
    }
}

fn chat_message(index: usize, item: &Value, issues: &mut Vec<String>) -> ChatMessage {
    match item {
        Value::Object(fields) => ChatMessage {
            role: string_field(fields, "role", &format!("messages[{}].role", index), issues),
            content: string_field(
                fields,
                "content",
                &format!("messages[{}].content", index),
                issues,
            ),
        },
        Value::Null => ChatMessage::default(),
        other => {
            issues.push(format!("messages[{}] ({})", index, json_type(other)));
            ChatMessage::default()
        }
    }
}

impl LenientRequest for EmbeddingRequest {
    fn from_json_fields(fields: &Map<String, Value>, issues: &mut Vec<String>) -> Self {
        let model = string_field(fields, "model", "model", issues);

        let input = match fields.get("input") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(EmbeddingInput::Single(text.clone())),
            Some(Value::Array(items)) => Some(EmbeddingInput::Batch(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        Value::String(text) => text.clone(),
                        Value::Null => String::new(),
                        other => {
                            issues.push(format!("input[{}] ({})", index, json_type(other)));
                            String::new()
                        }
                    })
                    .collect(),
            )),
            Some(other) => {
                issues.push(format!("input ({})", json_type(other)));
                None
            }
        };

        Self { model, input }
    }
}

/// `null` and absent read as empty; any other non-string is an issue.
fn string_field(
    fields: &Map<String, Value>,
    key: &str,
    path: &str,
    issues: &mut Vec<String>,
) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => {
            issues.push(format!("{} ({})", path, json_type(other)));
            String::new()
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
