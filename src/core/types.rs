//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An insertion-ordered mapping decoded from one query field.
///
/// `serde_json` is built with `preserve_order`, so iteration follows the
/// order keys appeared in the input text.
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// A container environment variable or secret name.
pub type VarName = String;

/// A pointer to a secret's storage location (usually an ARN).
pub type SecretRef = String;
