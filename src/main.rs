//! Taskenv - Encode env, metadata and secret maps for container definitions.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskenv::cli::output;
use taskenv::cli::{execute, Cli};
use taskenv::core::constants::LOG_ENV;
use taskenv::error::{Error, InputError, TerraformError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the result document.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("taskenv=debug")
        } else {
            EnvFilter::new("taskenv=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Input(InputError::MissingField(_)) | Error::Input(InputError::NotEncoded { .. }) => {
                Some(r#"each field is JSON text, e.g. {"env": "{\"FOO\":\"1\"}", "metadata": "{}"}"#)
            }
            Error::Terraform(TerraformError::NotFound(_)) => {
                Some("install terraform or set `binary` in the harness config")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
