//! State document reader.
//!
//! Reads the JSON state file `terraform apply -state=...` leaves behind. Both
//! the module-list layout (`modules[].path`, `modules[].outputs`) and the
//! flat top-level `outputs` table of newer state versions are understood.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::types::Mapping;
use crate::error::{Result, TerraformError};

const ROOT_MODULE: &str = "root";

/// A parsed state document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct State {
    #[serde(default)]
    version: Option<u64>,
    #[serde(default)]
    modules: Vec<ModuleState>,
    #[serde(default)]
    outputs: BTreeMap<String, OutputState>,
}

/// One module entry in the module-list layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleState {
    #[serde(default)]
    path: Vec<String>,
    #[serde(default)]
    resources: Mapping,
    #[serde(default)]
    outputs: BTreeMap<String, OutputState>,
}

impl ModuleState {
    /// Whether `module` is one of this module's path segments.
    fn is_at(&self, module: &str) -> bool {
        self.path.iter().any(|p| p == module)
    }
}

/// An output entry; only the value is of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputState {
    value: Value,
    #[serde(default)]
    sensitive: bool,
}

impl State {
    /// Parse a state document from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Read and parse a state file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or
    /// `TerraformError::State` if it is not a state document.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let state = Self::from_json(&text).map_err(|source| TerraformError::State {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            version = ?state.version,
            modules = state.modules.len(),
            "state loaded"
        );
        Ok(state)
    }

    /// State format version, if recorded.
    pub fn version(&self) -> Option<u64> {
        self.version
    }

    /// First resource named `resource` in a module whose path contains `module`.
    pub fn module_resource(&self, module: &str, resource: &str) -> Option<&Value> {
        self.modules
            .iter()
            .filter(|m| m.is_at(module))
            .find_map(|m| m.resources.get(resource))
    }

    /// First output named `output` in a module whose path contains `module`.
    pub fn module_output(&self, module: &str, output: &str) -> Option<&Value> {
        self.modules
            .iter()
            .filter(|m| m.is_at(module))
            .find_map(|m| m.outputs.get(output))
            .map(|o| &o.value)
    }

    /// Root-level output by name.
    pub fn output(&self, name: &str) -> Option<&Value> {
        self.root_outputs().get(name).map(|o| &o.value)
    }

    /// All root-level outputs, with sensitive values included.
    pub fn outputs(&self) -> BTreeMap<&str, &Value> {
        self.root_outputs()
            .iter()
            .map(|(k, o)| (k.as_str(), &o.value))
            .collect()
    }

    /// Names of root outputs marked sensitive.
    pub fn sensitive_outputs(&self) -> Vec<&str> {
        self.root_outputs()
            .iter()
            .filter(|(_, o)| o.sensitive)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    fn root_outputs(&self) -> &BTreeMap<String, OutputState> {
        self.modules
            .iter()
            .find(|m| m.path.len() == 1 && m.path[0] == ROOT_MODULE)
            .map(|m| &m.outputs)
            .filter(|outputs| !outputs.is_empty())
            .unwrap_or(&self.outputs)
    }
}
