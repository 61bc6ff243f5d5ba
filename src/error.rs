use std::error::Error;
use std::fmt;

use serde::Serialize;
use warp::reject::Reject;

use crate::constants::{
    ERROR_CODE_METHOD_NOT_ALLOWED, ERROR_CODE_MODEL_NOT_FOUND, ERROR_CODE_UNKNOWN_URL,
    ERROR_PARAM_MODEL, ERROR_TYPE_INVALID_REQUEST, ERROR_TYPE_SERVER,
};

/// Error type surfaced to API callers
#[derive(Debug, Clone)]
pub struct MockError {
    pub message: String,
    pub status_code: u16,
    kind: MockErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MockErrorKind {
    ModelNotFound(String),
    NotFound,
    MethodNotAllowed,
    Forbidden,
    InternalServerError,
}

/// OpenAI-style error envelope: `{"error": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub param: Option<String>,
    pub code: Option<String>,
}

impl MockError {
    pub fn model_not_found(model: &str) -> Self {
        Self {
            message: format!("The model '{}' does not exist", model),
            status_code: 400,
            kind: MockErrorKind::ModelNotFound(model.to_string()),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 404,
            kind: MockErrorKind::NotFound,
        }
    }

    pub fn method_not_allowed(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 405,
            kind: MockErrorKind::MethodNotAllowed,
        }
    }

    pub fn forbidden(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 403,
            kind: MockErrorKind::Forbidden,
        }
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 500,
            kind: MockErrorKind::InternalServerError,
        }
    }

    /// The rejected model name, if this is a model validation failure.
    pub fn missing_model(&self) -> Option<&str> {
        match &self.kind {
            MockErrorKind::ModelNotFound(model) => Some(model),
            _ => None,
        }
    }

    pub fn to_envelope(&self) -> ErrorEnvelope {
        let (error_type, param, code) = match self.kind {
            MockErrorKind::ModelNotFound(_) => (
                ERROR_TYPE_INVALID_REQUEST,
                Some(ERROR_PARAM_MODEL),
                Some(ERROR_CODE_MODEL_NOT_FOUND),
            ),
            MockErrorKind::NotFound => {
                (ERROR_TYPE_INVALID_REQUEST, None, Some(ERROR_CODE_UNKNOWN_URL))
            }
            MockErrorKind::MethodNotAllowed => (
                ERROR_TYPE_INVALID_REQUEST,
                None,
                Some(ERROR_CODE_METHOD_NOT_ALLOWED),
            ),
            MockErrorKind::Forbidden => (ERROR_TYPE_INVALID_REQUEST, None, None),
            MockErrorKind::InternalServerError => (ERROR_TYPE_SERVER, None, None),
        };

        ErrorEnvelope {
            error: ErrorBody {
                message: self.message.clone(),
                error_type: error_type.to_string(),
                param: param.map(str::to_string),
                code: code.map(str::to_string),
            },
        }
    }
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockError {}: {}", self.status_code, self.message)
    }
}

impl Error for MockError {}

impl Reject for MockError {}

#[cfg(test)]
mod tests {
    use super::MockError;

    #[test]
    fn model_not_found_renders_openai_envelope() {
        let err = MockError::model_not_found("gpt-5");
        let envelope = serde_json::to_value(err.to_envelope()).unwrap();

        assert_eq!(err.status_code, 400);
        assert_eq!(err.missing_model(), Some("gpt-5"));
        assert_eq!(envelope["error"]["type"], "invalid_request_error");
        assert_eq!(envelope["error"]["param"], "model");
        assert_eq!(envelope["error"]["code"], "model_not_found");
        assert_eq!(
            envelope["error"]["message"],
            "The model 'gpt-5' does not exist"
        );
    }

    #[test]
    fn internal_error_has_no_param_or_code() {
        let err = MockError::internal_server_error("boom");
        let envelope = serde_json::to_value(err.to_envelope()).unwrap();

        assert_eq!(err.status_code, 500);
        assert!(err.missing_model().is_none());
        assert_eq!(envelope["error"]["type"], "server_error");
        assert!(envelope["error"]["param"].is_null());
        assert!(envelope["error"]["code"].is_null());
    }
}
