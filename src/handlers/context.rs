use crate::config::ServiceConfig;
use crate::model::ModelRegistry;

/// Read-only view of the service settings handed to each handler.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub config: &'a ServiceConfig,
}

impl<'a> RequestContext<'a> {
    pub fn new(config: &'a ServiceConfig) -> Self {
        Self { config }
    }

    pub fn models(&self) -> &'a ModelRegistry {
        &self.config.models
    }
}
