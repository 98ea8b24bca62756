//! Double-encoded query and response documents.
//!
//! The caller can only pass flat string fields, so every structured field is
//! itself JSON text. A query looks like
//!
//! ```text
//! {"env": "{\"FOO\":\"1\"}", "metadata": "{\"bar\":\"2\"}"}
//! ```
//!
//! and a response carries the encoded list back the same way:
//!
//! ```text
//! {"env": "[{\"name\":\"FOO\",\"value\":\"1\"},{\"name\":\"BAR\",\"value\":\"2\"}]"}
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::core::constants::EMPTY_MAPPING;
use crate::core::types::Mapping;
use crate::error::{kind, InputError, Result};

/// A parsed query object.
#[derive(Debug, Clone)]
pub struct Query {
    fields: Mapping,
}

impl Query {
    /// Parse the raw query text.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Syntax` if the text is not JSON, or
    /// `InputError::NotAnObject` if it is not an object.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(InputError::Syntax)?;
        match value {
            Value::Object(fields) => {
                trace!(fields = fields.len(), "query parsed");
                Ok(Self { fields })
            }
            other => Err(InputError::NotAnObject(kind(&other)).into()),
        }
    }

    /// Decode a required double-encoded mapping field.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MissingField` if the field is absent, or any of
    /// the decoding errors described on [`decode_mapping`].
    pub fn mapping(&self, field: &str) -> Result<Mapping> {
        let raw = self
            .fields
            .get(field)
            .ok_or_else(|| InputError::MissingField(field.to_string()))?;
        decode_mapping(field, raw)
    }

    /// Decode an optional double-encoded mapping field.
    ///
    /// An absent field decodes as `"{}"`.
    pub fn mapping_or_empty(&self, field: &str) -> Result<Mapping> {
        match self.fields.get(field) {
            Some(raw) => decode_mapping(field, raw),
            None => decode_mapping(field, &Value::String(EMPTY_MAPPING.to_string())),
        }
    }
}

/// Decode one field value: a string holding a JSON object.
///
/// # Errors
///
/// - `InputError::NotEncoded` if the field is not a string
/// - `InputError::InvalidJson` if the string is not JSON
/// - `InputError::NotAMapping` if the JSON is not an object
pub fn decode_mapping(field: &str, raw: &Value) -> Result<Mapping> {
    let text = raw.as_str().ok_or_else(|| InputError::NotEncoded {
        field: field.to_string(),
        found: kind(raw),
    })?;

    let inner: Value = serde_json::from_str(text).map_err(|source| InputError::InvalidJson {
        field: field.to_string(),
        source,
    })?;

    match inner {
        Value::Object(map) => Ok(map),
        other => Err(InputError::NotAMapping {
            field: field.to_string(),
            found: kind(&other),
        }
        .into()),
    }
}

/// A single-field response whose value is JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    field: &'static str,
    encoded: String,
}

impl Response {
    /// Encode `items` and wrap them under `field`.
    pub fn new<T: Serialize>(field: &'static str, items: &[T]) -> Result<Self> {
        let encoded = serde_json::to_string(items)?;
        Ok(Self { field, encoded })
    }

    /// The inner JSON text (the list itself).
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Render the outer document, without a trailing newline.
    pub fn render(&self) -> Result<String> {
        let mut outer = Mapping::new();
        outer.insert(self.field.to_string(), Value::String(self.encoded.clone()));
        Ok(serde_json::to_string(&outer)?)
    }
}
