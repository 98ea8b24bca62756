//! Container definition list entries.
//!
//! The orchestration format wants `environment` and `secrets` as lists of
//! small objects rather than maps. These are the two entry shapes.

use serde::Serialize;
use serde_json::Value;

use crate::core::types::{SecretRef, VarName};

/// One `environment` entry: `{"name": ..., "value": ...}`.
///
/// The value is kept as an opaque JSON value and emitted exactly as it
/// arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue {
    name: VarName,
    value: Value,
}

impl NamedValue {
    /// Create an entry from a name and a value
    pub fn new(name: impl Into<VarName>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal value
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// One `secrets` entry: `{"name": ..., "valueFrom": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedSecretRef {
    name: VarName,
    value_from: SecretRef,
}

impl NamedSecretRef {
    /// Create an entry from a name and a secret reference
    pub fn new(name: impl Into<VarName>, value_from: impl Into<SecretRef>) -> Self {
        Self {
            name: name.into(),
            value_from: value_from.into(),
        }
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the secret lives
    pub fn value_from(&self) -> &str {
        &self.value_from
    }
}
