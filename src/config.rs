//! Realm configuration

use serde::{Deserialize, Serialize};

use crate::error::JsError;

/// Engine-mode switches fixed when a realm is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmConfig {
    /// When enabled, `__proto__: v` in an object literal sets the prototype
    /// link and `Object.prototype.__proto__` is an accessor. When disabled,
    /// `__proto__` is an ordinary property name everywhere.
    pub proto_initializer: bool,
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self {
            proto_initializer: true,
        }
    }
}

impl RealmConfig {
    /// Configuration with the `__proto__` special forms switched off
    pub fn without_proto_initializer() -> Self {
        Self {
            proto_initializer: false,
        }
    }

    /// Parse a JSON document such as `{"proto_initializer": false}`.
    /// Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self, JsError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self)?)
    }
}
