pub mod chat;
pub mod context;
pub mod embeddings;
pub mod models;

pub use chat::handle_chat_completions;
pub use context::RequestContext;
pub use embeddings::handle_embeddings;
pub use models::handle_models;
