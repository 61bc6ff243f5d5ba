pub mod chat;
pub mod embedding;
pub mod listing;
pub mod tokens;

pub use chat::generate_chat_completion;
pub use embedding::generate_embeddings;
pub use listing::list_models;
