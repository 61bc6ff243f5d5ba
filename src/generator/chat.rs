use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::constants::{
    CHAT_ID_LENGTH, CHAT_ID_PREFIX, FINISH_REASON_STOP, MOCK_COMPLETION_CONTENT,
    MOCK_COMPLETION_TOKENS, OBJECT_CHAT_COMPLETION, ROLE_ASSISTANT,
};
use crate::generator::tokens::estimate_message_tokens;
use crate::model::types::{ChatChoice, ChatCompletionResponse, ChatMessage, ChatUsage};

/// Builds the canned single-choice completion for an already-resolved model.
pub fn generate_chat_completion(model: String, messages: &[ChatMessage]) -> ChatCompletionResponse {
    let prompt_tokens = estimate_message_tokens(messages);

    ChatCompletionResponse {
        id: format!("{}{}", CHAT_ID_PREFIX, random_id(CHAT_ID_LENGTH)),
        object: OBJECT_CHAT_COMPLETION.to_string(),
        created: chrono::Utc::now().timestamp(),
        model,
        choices: vec![ChatChoice {
            index: 0,
            message: ChatMessage::new(ROLE_ASSISTANT, MOCK_COMPLETION_CONTENT),
            finish_reason: FINISH_REASON_STOP.to_string(),
        }],
        usage: ChatUsage {
            prompt_tokens,
            completion_tokens: MOCK_COMPLETION_TOKENS,
            total_tokens: prompt_tokens + MOCK_COMPLETION_TOKENS,
        },
    }
}

/// Opaque `[A-Za-z0-9]` identifier; not cryptographically secure.
pub fn random_id(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
