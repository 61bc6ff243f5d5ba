/// API endpoints served by the mock
pub const ENDPOINT_CHAT_COMPLETIONS: &str = "/v1/chat/completions";
pub const ENDPOINT_EMBEDDINGS: &str = "/v1/embeddings";
pub const ENDPOINT_MODELS: &str = "/v1/models";

/// Built-in configuration defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CHAT_MODELS: &[&str] = &["gpt-3.5-turbo", "gpt-4"];
pub const DEFAULT_EMBEDDING_MODELS: &[&str] = &["text-embedding-ada-002"];

/// Response object labels
pub const OBJECT_CHAT_COMPLETION: &str = "chat.completion";
pub const OBJECT_LIST: &str = "list";
pub const OBJECT_EMBEDDING: &str = "embedding";
pub const OBJECT_MODEL: &str = "model";
pub const MODEL_OWNER: &str = "openai";

/// Chat mock content
pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";
pub const FINISH_REASON_STOP: &str = "stop";
pub const DEFAULT_PROMPT: &str = "Hello";
pub const MOCK_COMPLETION_CONTENT: &str = "This is a mock response from the OpenAI API emulator. Your request has been processed successfully.";
pub const MOCK_COMPLETION_TOKENS: u32 = 20;
pub const CHAT_ID_PREFIX: &str = "chatcmpl-";
pub const CHAT_ID_LENGTH: usize = 29;

/// Embedding mock content
pub const EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_INPUT: &str = "Default input text";
pub const EMBEDDING_SEED_BASE: i64 = 31;

/// Token estimation heuristic
pub const CHARS_PER_TOKEN: usize = 4;

/// Models listing reports every model as created this long ago
pub const MODEL_AGE_SECONDS: i64 = 30 * 86_400;

/// Response headers
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const HEADER_CACHE_CONTROL: &str = "no-cache";

/// Error envelope labels
pub const ERROR_TYPE_INVALID_REQUEST: &str = "invalid_request_error";
pub const ERROR_TYPE_SERVER: &str = "server_error";
pub const ERROR_CODE_MODEL_NOT_FOUND: &str = "model_not_found";
pub const ERROR_CODE_UNKNOWN_URL: &str = "unknown_url";
pub const ERROR_CODE_METHOD_NOT_ALLOWED: &str = "method_not_allowed";
pub const ERROR_PARAM_MODEL: &str = "model";

/// Logging prefixes
pub const LOG_PREFIX_SUCCESS: &str = "✅";
pub const LOG_PREFIX_WARNING: &str = "⚠️";
