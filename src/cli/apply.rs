//! Apply command.
//!
//! Runs the provisioning harness described by a config file and prints the
//! resulting root outputs as JSON.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::cli::output;
use crate::core::terraform::{HarnessConfig, State};
use crate::error::{Result, TerraformError};

/// Apply the configured root module and print its outputs.
pub fn execute(config_path: &Path, output_name: Option<&str>) -> Result<()> {
    let config = HarnessConfig::load(config_path)?;
    let state = config.terraform().apply()?;

    let rendered = render_outputs(&state, output_name)?;
    println!("{}", rendered);
    Ok(())
}

/// Render one output, or all root outputs, as pretty JSON.
///
/// Warns on stderr when printing every output includes sensitive ones.
pub fn render_outputs(state: &State, output_name: Option<&str>) -> Result<String> {
    let value = match output_name {
        Some(name) => state
            .output(name)
            .cloned()
            .ok_or_else(|| TerraformError::MissingOutput(name.to_string()))?,
        None => {
            let sensitive = state.sensitive_outputs();
            if !sensitive.is_empty() {
                output::warn(&format!("printing sensitive outputs: {}", sensitive.join(", ")));
            }
            let outputs: serde_json::Map<String, Value> = state
                .outputs()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            Value::Object(outputs)
        }
    };

    debug!(output = ?output_name, "rendering outputs");
    Ok(serde_json::to_string_pretty(&value)?)
}
