//! Map-to-list encoders.
//!
//! Both encoders concatenate two mappings into one list, keeping each
//! mapping's iteration order and never merging duplicate names.

use serde_json::Value;
use tracing::debug;

use crate::core::constants::{FIELD_COMMON_SECRETS, FIELD_SECRETS};
use crate::core::domain::{NamedSecretRef, NamedValue};
use crate::core::types::Mapping;
use crate::error::{kind, InputError, Result};

/// Encode environment variables and metadata as `environment` entries.
///
/// `env` entries come first with their names unchanged, followed by
/// `metadata` entries with their names upper-cased. Values are passed
/// through as-is.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use taskenv::core::encode::encode_env;
///
/// let env = json!({"FOO": "1"});
/// let metadata = json!({"bar": "2"});
/// let out = encode_env(env.as_object().unwrap(), metadata.as_object().unwrap());
///
/// assert_eq!(
///     serde_json::to_value(&out).unwrap(),
///     json!([{"name": "FOO", "value": "1"}, {"name": "BAR", "value": "2"}])
/// );
/// ```
pub fn encode_env(env: &Mapping, metadata: &Mapping) -> Vec<NamedValue> {
    debug!(env = env.len(), metadata = metadata.len(), "encoding env");

    let literal = env
        .iter()
        .map(|(name, value)| NamedValue::new(name.as_str(), value.clone()));
    let upper = metadata
        .iter()
        .map(|(name, value)| NamedValue::new(name.to_uppercase(), value.clone()));

    literal.chain(upper).collect()
}

/// Encode secret references as `secrets` entries.
///
/// `secrets` entries come first, then `common_secrets`. Names are not
/// changed.
///
/// # Errors
///
/// Returns `InputError::NonStringValue` if any value is not a string.
pub fn encode_secrets(secrets: &Mapping, common_secrets: &Mapping) -> Result<Vec<NamedSecretRef>> {
    debug!(
        secrets = secrets.len(),
        common_secrets = common_secrets.len(),
        "encoding secrets"
    );

    let mut out = Vec::with_capacity(secrets.len() + common_secrets.len());
    for (field, mapping) in [(FIELD_SECRETS, secrets), (FIELD_COMMON_SECRETS, common_secrets)] {
        for (name, value) in mapping {
            out.push(NamedSecretRef::new(name.as_str(), secret_ref(field, name, value)?));
        }
    }

    Ok(out)
}

fn secret_ref<'a>(field: &str, key: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| {
        InputError::NonStringValue {
            field: field.to_string(),
            key: key.to_string(),
            found: kind(value),
        }
        .into()
    })
}
