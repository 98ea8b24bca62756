//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a taskenv command running in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("taskenv").expect("failed to find taskenv binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("TASKENV_LOG");
        cmd.env_remove("TASKENV_LOG_JSON");
        cmd
    }

    /// Shortcut for `taskenv env` with a query on stdin.
    pub fn env(&self, query: &str) -> Output {
        self.cmd()
            .arg("env")
            .write_stdin(query)
            .output()
            .expect("failed to run taskenv env")
    }

    /// Shortcut for `taskenv secrets` with a query on stdin.
    pub fn secrets(&self, query: &str) -> Output {
        self.cmd()
            .arg("secrets")
            .write_stdin(query)
            .output()
            .expect("failed to run taskenv secrets")
    }

    /// Shortcut for `taskenv secrets --legacy` with a query on stdin.
    pub fn secrets_legacy(&self, query: &str) -> Output {
        self.cmd()
            .args(["secrets", "--legacy"])
            .write_stdin(query)
            .output()
            .expect("failed to run taskenv secrets --legacy")
    }

    /// Shortcut for `taskenv apply --config <path>`.
    pub fn apply(&self, config: &str, output: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["apply", "--config", config]);
        if let Some(name) = output {
            cmd.args(["--output", name]);
        }
        cmd.output().expect("failed to run taskenv apply")
    }
}
