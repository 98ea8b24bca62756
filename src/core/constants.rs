//! Constants used throughout taskenv.
//!
//! Centralizes field names and environment variable names.

/// Query field holding the literal environment mapping.
pub const FIELD_ENV: &str = "env";

/// Query field holding the metadata mapping (keys are upper-cased).
pub const FIELD_METADATA: &str = "metadata";

/// Query and response field holding the per-service secrets mapping.
pub const FIELD_SECRETS: &str = "secrets";

/// Query field holding secrets shared by every service.
pub const FIELD_COMMON_SECRETS: &str = "common_secrets";

/// Encoded form of an absent optional mapping.
pub const EMPTY_MAPPING: &str = "{}";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "TASKENV_LOG";

/// Environment variable that switches log output to JSON lines.
pub const LOG_JSON_ENV: &str = "TASKENV_LOG_JSON";

/// Default provisioning tool binary.
pub const TERRAFORM_BIN: &str = "terraform";

/// State file name inside the harness scratch directory.
pub const STATE_FILE: &str = "terraform.tfstate";
