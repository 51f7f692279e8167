// golfdata-core/src/domain/registry.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;
use crate::domain::provenance::Provenance;

const DATA_KEY: &str = "data";

/// NGF club registry, kept as the upstream object.
///
/// Club entries are not modelled: whatever sits under `data` is written back
/// verbatim, and key order follows the upstream document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubRegistrySnapshot(Map<String, Value>);

impl ClubRegistrySnapshot {
    /// Shape check only: an object with a `data` key.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(map) if map.contains_key(DATA_KEY) => Ok(Self(map)),
            Value::Object(_) => Err(DomainError::Shape(format!(
                "object has no '{DATA_KEY}' key"
            ))),
            other => Err(DomainError::Shape(format!(
                "expected an object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Adds `source` and `fetched`. Keys already present upstream keep their
    /// position and get overwritten.
    pub fn stamp(mut self, provenance: Provenance) -> Self {
        self.0
            .insert("source".to_string(), Value::String(provenance.source));
        self.0
            .insert("fetched".to_string(), Value::String(provenance.fetched));
        self
    }

    pub fn entries(&self) -> Option<&Vec<Value>> {
        self.0.get(DATA_KEY).and_then(Value::as_array)
    }

    /// Number of club entries; 0 when `data` is not an array.
    pub fn entry_count(&self) -> usize {
        self.entries().map_or(0, Vec::len)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
