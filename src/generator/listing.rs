use crate::constants::{MODEL_AGE_SECONDS, MODEL_OWNER, OBJECT_LIST, OBJECT_MODEL};
use crate::model::ModelRegistry;
use crate::model::types::{ModelEntry, ModelsResponse};

pub fn list_models(registry: &ModelRegistry) -> ModelsResponse {
    let created = chrono::Utc::now().timestamp() - MODEL_AGE_SECONDS;

    ModelsResponse {
        object: OBJECT_LIST.to_string(),
        data: registry
            .all()
            .map(|id| ModelEntry {
                id: id.clone(),
                object: OBJECT_MODEL.to_string(),
                created,
                owned_by: MODEL_OWNER.to_string(),
            })
            .collect(),
    }
}
