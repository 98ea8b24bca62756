//! Taskenv - Encode env, metadata and secret maps for container definitions.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encode        # env / secrets stdin-to-stdout transforms
//! │   ├── apply         # Run the provisioning harness from a config file
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── encode        # Pure map-to-list encoders
//!     ├── document      # Double-encoded query/response documents
//!     ├── domain/       # NamedValue, NamedSecretRef
//!     ├── terraform/    # terraform get/apply harness and state reader
//!     ├── constants     # Field and variable names
//!     └── types         # Type aliases
//! ```
//!
//! # Example
//!
//! ```
//! use taskenv::core::document::{Query, Response};
//! use taskenv::core::encode::encode_env;
//!
//! let query = Query::parse(r#"{"env": "{\"FOO\":\"1\"}", "metadata": "{\"bar\":\"2\"}"}"#)?;
//! let items = encode_env(&query.mapping("env")?, &query.mapping("metadata")?);
//! let response = Response::new("env", &items)?;
//!
//! assert_eq!(
//!     response.encoded(),
//!     r#"[{"name":"FOO","value":"1"},{"name":"BAR","value":"2"}]"#
//! );
//! # Ok::<(), taskenv::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
