//! Command-line interface.

pub mod apply;
pub mod completions;
pub mod encode;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::LOG_JSON_ENV;

/// Taskenv - Encode env, metadata and secret maps for container definitions.
#[derive(Parser)]
#[command(
    name = "taskenv",
    about = "Encode env, metadata and secret maps for container definitions",
    version,
    after_help = "Reads a JSON query on stdin, writes a JSON result on stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = LOG_JSON_ENV)]
    pub log_json: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encode `env` and `metadata` as an environment list
    Env,

    /// Encode `secrets` and `common_secrets` as a secrets list
    Secrets {
        /// Require `secrets` and ignore `common_secrets`
        #[arg(long)]
        legacy: bool,
    },

    /// Apply a terraform configuration into a scratch state and print outputs
    Apply {
        /// Harness config file (TOML)
        #[arg(short, long)]
        config: PathBuf,
        /// Print only this root output
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Env => encode::env(),
        Secrets { legacy } => encode::secrets(encode::SecretsForm::from_legacy_flag(legacy)),
        Apply { config, output } => apply::execute(&config, output.as_deref()),
        Completions { shell } => completions::execute(shell),
    }
}
