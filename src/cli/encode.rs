//! Encode commands.
//!
//! Each command reads the whole query from stdin, encodes it, and only then
//! writes the response. Nothing reaches stdout on failure.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::core::constants::{FIELD_COMMON_SECRETS, FIELD_ENV, FIELD_METADATA, FIELD_SECRETS};
use crate::core::document::{Query, Response};
use crate::core::encode::{encode_env, encode_secrets};
use crate::core::types::Mapping;
use crate::error::{Error, InputError, Result};

/// Which query shape the secrets command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretsForm {
    /// `secrets` is required; `common_secrets` is ignored.
    Legacy,
    /// Both `secrets` and `common_secrets` are optional.
    Current,
}

impl SecretsForm {
    /// Map the `--legacy` flag to a form.
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            Self::Legacy
        } else {
            Self::Current
        }
    }
}

/// Encode the env query on stdin.
pub fn env() -> Result<()> {
    let input = read_stdin()?;
    let rendered = env_document(&input)?;
    write_stdout(&rendered)
}

/// Encode the secrets query on stdin.
pub fn secrets(form: SecretsForm) -> Result<()> {
    let input = read_stdin()?;
    let rendered = secrets_document(&input, form)?;
    write_stdout(&rendered)
}

/// Transform an env query document into its response document.
pub fn env_document(input: &str) -> Result<String> {
    let query = Query::parse(input)?;
    let env = query.mapping(FIELD_ENV)?;
    let metadata = query.mapping(FIELD_METADATA)?;

    let items = encode_env(&env, &metadata);
    Response::new(FIELD_ENV, &items)?.render()
}

/// Transform a secrets query document into its response document.
pub fn secrets_document(input: &str, form: SecretsForm) -> Result<String> {
    let query = Query::parse(input)?;
    let (secrets, common_secrets) = match form {
        SecretsForm::Legacy => (query.mapping(FIELD_SECRETS)?, Mapping::new()),
        SecretsForm::Current => (
            query.mapping_or_empty(FIELD_SECRETS)?,
            query.mapping_or_empty(FIELD_COMMON_SECRETS)?,
        ),
    };

    let items = encode_secrets(&secrets, &common_secrets)?;
    Response::new(FIELD_SECRETS, &items)?.render()
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => Error::from(InputError::NotUtf8),
            _ => Error::from(e),
        })?;
    debug!(bytes = input.len(), "read query");
    Ok(input)
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}
