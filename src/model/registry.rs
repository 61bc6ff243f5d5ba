use crate::error::MockError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Chat,
    Embedding,
}

/// The model identifiers the mock claims to serve, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    chat: Vec<String>,
    embedding: Vec<String>,
}

impl ModelRegistry {
    pub fn new(chat: Vec<String>, embedding: Vec<String>) -> Self {
        Self { chat, embedding }
    }

    pub fn chat(&self) -> &[String] {
        &self.chat
    }

    pub fn embedding(&self) -> &[String] {
        &self.embedding
    }

    pub fn models(&self, kind: ModelKind) -> &[String] {
        match kind {
            ModelKind::Chat => &self.chat,
            ModelKind::Embedding => &self.embedding,
        }
    }

    /// Fails only for a non-empty model that is not configured for `kind`.
    pub fn check(&self, kind: ModelKind, requested: &str) -> Result<(), MockError> {
        if requested.is_empty() || self.models(kind).iter().any(|m| m == requested) {
            Ok(())
        } else {
            Err(MockError::model_not_found(requested))
        }
    }

    /// Validates `requested` and returns the model to report back.
    ///
    /// An empty request resolves to the first configured model of `kind`,
    /// or stays empty when none are configured.
    pub fn resolve(&self, kind: ModelKind, requested: &str) -> Result<String, MockError> {
        self.check(kind, requested)?;

        if requested.is_empty() {
            Ok(self.models(kind).first().cloned().unwrap_or_default())
        } else {
            Ok(requested.to_string())
        }
    }

    /// Chat models first, then embedding models.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.chat.iter().chain(self.embedding.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelKind, ModelRegistry};

    fn registry() -> ModelRegistry {
        ModelRegistry::new(
            vec!["gpt-3.5-turbo".to_string(), "gpt-4".to_string()],
            vec!["text-embedding-ada-002".to_string()],
        )
    }

    #[test]
    fn accepts_configured_model() {
        let resolved = registry().resolve(ModelKind::Chat, "gpt-4").unwrap();
        assert_eq!(resolved, "gpt-4");
    }

    #[test]
    fn rejects_unknown_model() {
        let err = registry()
            .resolve(ModelKind::Chat, "claude-3")
            .unwrap_err();
        assert_eq!(err.status_code, 400);
        assert_eq!(err.missing_model(), Some("claude-3"));
    }

    #[test]
    fn model_lists_are_kind_specific() {
        let registry = registry();
        assert!(registry.check(ModelKind::Embedding, "gpt-4").is_err());
        assert!(
            registry
                .check(ModelKind::Chat, "text-embedding-ada-002")
                .is_err()
        );
    }

    #[test]
    fn matching_is_exact() {
        assert!(registry().check(ModelKind::Chat, "GPT-4").is_err());
        assert!(registry().check(ModelKind::Chat, "gpt-4 ").is_err());
    }

    #[test]
    fn empty_request_uses_first_model() {
        let registry = registry();
        assert_eq!(
            registry.resolve(ModelKind::Chat, "").unwrap(),
            "gpt-3.5-turbo"
        );
        assert_eq!(
            registry.resolve(ModelKind::Embedding, "").unwrap(),
            "text-embedding-ada-002"
        );
    }

    #[test]
    fn empty_request_with_no_models_stays_empty() {
        let registry = ModelRegistry::default();
        assert_eq!(registry.resolve(ModelKind::Chat, "").unwrap(), "");
        assert!(registry.resolve(ModelKind::Chat, "gpt-4").is_err());
    }

    #[test]
    fn lists_chat_then_embedding() {
        let registry = ModelRegistry::new(
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        );
        let ids: Vec<&str> = registry.all().map(String::as_str).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
