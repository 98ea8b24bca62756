//! Harness configuration file.
//!
//! ```toml
//! root = "."
//! varfiles = ["test.tfvars"]
//!
//! [vars]
//! container_name = "web"
//! cpu = 1024
//! metadata = { label_key_1 = "label_value_1" }
//!
//! [env]
//! AWS_DEFAULT_REGION = "eu-west-1"
//! ```
//!
//! Relative `root` and `varfiles` paths resolve against the directory that
//! holds the config file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::Terraform;
use crate::error::{ConfigError, Result};

/// Parsed harness configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Root module directory
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Binary to run instead of `terraform`
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// Variable files, in the order they are passed
    #[serde(default)]
    pub varfiles: Vec<PathBuf>,
    /// Input variables
    #[serde(default)]
    pub vars: BTreeMap<String, toml::Value>,
    /// Extra environment for the child processes
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl HarnessConfig {
    /// Load a config file and resolve its relative paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading harness config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }

        debug!(
            vars = config.vars.len(),
            varfiles = config.varfiles.len(),
            "harness config loaded"
        );
        Ok(config)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        self.root = base.join(&self.root);
        for file in &mut self.varfiles {
            *file = base.join(&*file);
        }
        if let Some(binary) = &self.binary {
            // A bare name is looked up on PATH; anything with a separator is a path.
            if binary.components().count() > 1 {
                self.binary = Some(base.join(binary));
            }
        }
    }

    /// Build the harness this config describes.
    pub fn terraform(&self) -> Terraform {
        let mut tf = Terraform::new(&self.root);
        if let Some(binary) = &self.binary {
            tf = tf.binary(binary);
        }
        for (key, value) in &self.vars {
            tf = tf.var(key, render_var(value));
        }
        for file in &self.varfiles {
            tf = tf.var_file(file);
        }
        for (key, value) in &self.env {
            tf = tf.env(key, value);
        }
        tf
    }
}

/// Render a variable for `-var key=value`.
///
/// Strings are passed raw; everything else becomes an HCL literal.
pub fn render_var(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => literal(other),
    }
}

fn literal(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => quote(s),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(d) => quote(&d.to_string()),
        toml::Value::Array(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        toml::Value::Table(table) if table.is_empty() => "{}".to_string(),
        toml::Value::Table(table) => {
            let pairs: Vec<String> = table
                .iter()
                .map(|(k, v)| format!("{} = {}", quote(k), literal(v)))
                .collect();
            format!("{{ {} }}", pairs.join(", "))
        }
    }
}

// HCL string escapes are a superset of what JSON produces.
fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
