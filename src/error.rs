//! Error types.
//!
//! Errors are grouped by the layer that raises them. Every variant aborts the
//! current command; nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by every fallible operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed input: {0}")]
    Input(#[from] InputError),

    #[error("terraform: {0}")]
    Terraform(#[from] TerraformError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The query document did not have the expected shape.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input is not valid UTF-8")]
    NotUtf8,

    #[error("input is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected a JSON object at the top level, got {0}")]
    NotAnObject(&'static str),

    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}` must be a JSON-encoded string, got {found}")]
    NotEncoded { field: String, found: &'static str },

    #[error("field `{field}` does not contain valid JSON: {source}")]
    InvalidJson {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("field `{field}` must decode to a mapping, got {found}")]
    NotAMapping { field: String, found: &'static str },

    #[error("field `{field}`: value for `{key}` must be a string, got {found}")]
    NonStringValue {
        field: String,
        key: String,
        found: &'static str,
    },
}

/// Running the provisioning tool failed.
#[derive(Error, Debug)]
pub enum TerraformError {
    #[error("`{0}` not found on PATH")]
    NotFound(String),

    #[error("`terraform {command}` exited with {}", describe_exit(.code))]
    Failed {
        command: &'static str,
        code: Option<i32>,
    },

    #[error("no root output named `{0}`")]
    MissingOutput(String),

    #[error("could not read state file {}: {source}", .path.display())]
    State {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The harness configuration file could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Short name of a JSON value's kind, for diagnostics.
pub(crate) fn kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
