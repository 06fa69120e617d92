//! Error types for the object model

use crate::value::{CheapClone, JsString, JsValue};
use thiserror::Error;

/// Main error type for property access and object manipulation
#[derive(Debug, Error)]
pub enum JsError {
    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// Value thrown by a host function body (getter, setter or method).
    /// Propagated to the caller unmodified.
    #[error("Uncaught {value:?}")]
    ThrownValue { value: JsValue },

    #[error("ConfigError: {0}")]
    Config(#[from] serde_json::Error),

    /// Host misuse, e.g. a handle that does not belong to this realm
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::TypeError {
            message: message.into(),
        }
    }

    /// Create an error that carries a thrown JavaScript value
    pub fn thrown(value: JsValue) -> Self {
        JsError::ThrownValue { value }
    }

    /// Create an internal error for unexpected states
    /// These should never happen when the host uses handles from the same realm
    pub fn internal_error(message: impl Into<String>) -> Self {
        JsError::Internal(message.into())
    }

    /// Check whether this is a TypeError-kind failure
    pub fn is_type_error(&self) -> bool {
        matches!(self, JsError::TypeError { .. })
    }

    /// Extract the JsValue a `catch` clause would observe
    pub fn to_value(&self) -> JsValue {
        match self {
            JsError::ThrownValue { value } => value.cheap_clone(),
            JsError::TypeError { message } => {
                JsValue::String(JsString::from(format!("TypeError: {}", message)))
            }
            JsError::Config(err) => {
                JsValue::String(JsString::from(format!("ConfigError: {}", err)))
            }
            JsError::Internal(msg) => {
                JsValue::String(JsString::from(format!("InternalError: {}", msg)))
            }
        }
    }
}
