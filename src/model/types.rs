use serde::Serialize;

use crate::constants::{DEFAULT_EMBEDDING_INPUT, DEFAULT_PROMPT, ROLE_USER};

// Request types are built field by field in `http::parsing`, so they only
// derive `Serialize` (for debug I/O logging).

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Option<Vec<ChatMessage>>,
}

impl ChatCompletionRequest {
    /// Messages to bill for; a request without any gets a synthesized greeting.
    pub fn effective_messages(&self) -> Vec<ChatMessage> {
        match &self.messages {
            Some(messages) => messages.clone(),
            None => vec![ChatMessage::new(ROLE_USER, DEFAULT_PROMPT)],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatChoice>,
    pub usage: ChatUsage,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// `input` may be a bare string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: Option<EmbeddingInput>,
}

impl EmbeddingRequest {
    pub fn effective_inputs(&self) -> Vec<String> {
        match &self.input {
            Some(EmbeddingInput::Single(text)) => vec![text.clone()],
            Some(EmbeddingInput::Batch(texts)) => texts.clone(),
            None => vec![DEFAULT_EMBEDDING_INPUT.to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingResponse {
    pub object: String,
    pub data: Vec<EmbeddingData>,
    pub model: String,
    pub usage: EmbeddingUsage,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingData {
    pub object: String,
    pub embedding: Vec<f64>,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmbeddingUsage {
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub owned_by: String,
}

#[cfg(test)]
mod tests {
    use super::{ChatCompletionRequest, ChatMessage, EmbeddingInput, EmbeddingRequest};

    #[test]
    fn missing_messages_synthesize_greeting() {
        let request = ChatCompletionRequest {
            model: "gpt-4".to_string(),
            messages: None,
        };
        let messages = request.effective_messages();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[0].content, "Hello");
    }

    #[test]
    fn empty_messages_are_kept_empty() {
        let request = ChatCompletionRequest {
            model: String::new(),
            messages: Some(Vec::new()),
        };
        assert!(request.effective_messages().is_empty());
    }

    #[test]
    fn given_messages_are_returned_as_is() {
        let request = ChatCompletionRequest {
            model: String::new(),
            messages: Some(vec![ChatMessage::new("system", "be brief")]),
        };
        assert_eq!(
            request.effective_messages(),
            vec![ChatMessage::new("system", "be brief")]
        );
    }

    #[test]
    fn embedding_input_accepts_string_or_list() {
        let single = EmbeddingRequest {
            model: String::new(),
            input: Some(EmbeddingInput::Single("hi".to_string())),
        };
        assert_eq!(single.effective_inputs(), vec!["hi".to_string()]);

        let batch = EmbeddingRequest {
            model: String::new(),
            input: Some(EmbeddingInput::Batch(vec!["a".to_string(), "b".to_string()])),
        };
        assert_eq!(batch.effective_inputs(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn missing_input_uses_default_text() {
        let request = EmbeddingRequest::default();
        assert_eq!(
            request.effective_inputs(),
            vec!["Default input text".to_string()]
        );
    }
}
