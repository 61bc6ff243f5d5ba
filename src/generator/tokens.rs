use crate::constants::CHARS_PER_TOKEN;
use crate::model::types::ChatMessage;

/// Rough token count: UTF-8 byte length divided by four, truncated.
pub fn estimate_tokens(text: &str) -> u32 {
    (text.len() / CHARS_PER_TOKEN) as u32
}

pub fn estimate_message_tokens(messages: &[ChatMessage]) -> u32 {
    messages
        .iter()
        .map(|message| estimate_tokens(&message.content))
        .sum()
}
