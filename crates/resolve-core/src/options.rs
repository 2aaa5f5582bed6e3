//! Resolve options handed to the host resolver

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host resolver configuration (extensions, aliases, module directories...).
///
/// Opaque to this crate apart from the emptiness check deciding whether a
/// request's defaults get overridden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolveOptions(Map<String, Value>);

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` if it is a mapping.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ResolveOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
