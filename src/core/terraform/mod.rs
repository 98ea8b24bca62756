//! Provisioning harness.
//!
//! Drives the `terraform` CLI against a throwaway state file so a
//! configuration that uses the encoders can be checked end-to-end. Only the
//! `get` and `apply` subcommands are used; everything else about the tool's
//! lifecycle is left to the caller.

mod config;
mod state;

pub use config::{render_var, HarnessConfig};
pub use state::{ModuleState, OutputState, State};

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::core::constants::{STATE_FILE, TERRAFORM_BIN};
use crate::error::{Result, TerraformError};

/// A `terraform` invocation against one root module.
#[derive(Debug, Clone)]
pub struct Terraform {
    root: PathBuf,
    binary: PathBuf,
    vars: BTreeMap<String, String>,
    var_files: Vec<PathBuf>,
    env: BTreeMap<String, String>,
}

impl Terraform {
    /// Harness for the configuration in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            binary: PathBuf::from(TERRAFORM_BIN),
            vars: BTreeMap::new(),
            var_files: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Use a different binary (a name on PATH or a path).
    pub fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set an input variable, passed as `-var key=value`.
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Add a variables file, passed as `-var-file path`.
    pub fn var_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.var_files.push(path.into());
        self
    }

    /// Set an environment variable for the child processes.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Root module directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Arguments following `terraform apply`.
    pub fn apply_args(&self, state_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-refresh=false".into()];

        for (key, value) in &self.vars {
            args.push("-var".into());
            args.push(format!("{}={}", key, value).into());
        }

        for file in &self.var_files {
            args.push("-var-file".into());
            args.push(file.clone().into_os_string());
        }

        let mut state_arg = OsString::from("-state=");
        state_arg.push(state_path);
        args.push(state_arg);
        args.push(self.root.clone().into_os_string());

        args
    }

    /// Fetch modules, apply into a fresh state file and return the state.
    ///
    /// The state lives in a temporary directory that is removed before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns `TerraformError::NotFound` if the binary cannot be found,
    /// `TerraformError::Failed` if either subcommand exits unsuccessfully,
    /// or a state error if the state file cannot be read.
    pub fn apply(&self) -> Result<State> {
        let binary = self.resolve_binary()?;
        let scratch = tempfile::TempDir::new()?;
        let state_path = scratch.path().join(STATE_FILE);

        self.run(&binary, "get", vec![self.root.clone().into_os_string()])?;
        self.run(&binary, "apply", self.apply_args(&state_path))?;

        State::load(&state_path)
    }

    fn resolve_binary(&self) -> Result<PathBuf> {
        which::which(&self.binary)
            .map_err(|_| TerraformError::NotFound(self.binary.display().to_string()).into())
    }

    fn run(&self, binary: &Path, command: &'static str, args: Vec<OsString>) -> Result<()> {
        debug!(command, args = args.len(), "running terraform");

        let output = Command::new(binary)
            .arg(command)
            .args(&args)
            .envs(&self.env)
            .output()?;

        debug!(
            command,
            stdout = %String::from_utf8_lossy(&output.stdout),
            "terraform finished"
        );

        if !output.status.success() {
            warn!(
                command,
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "terraform failed"
            );
            return Err(TerraformError::Failed {
                command,
                code: output.status.code(),
            }
            .into());
        }

        Ok(())
    }
}
