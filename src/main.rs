//! ocrclean - CLI entry point
//!
//! Parses arguments, loads configuration, and dispatches exactly one
//! operation per process invocation.

use clap::Parser;
use eyre::{Context, Result};

use ocrclean::cli::{Cli, Command};
use ocrclean::config::Config;
use ocrclean::llm::StubGateway;
use ocrclean::ops::{self, CompareKind};

fn setup_logging(verbose: bool) -> Result<()> {
    // Diagnostics go to stderr; stdout is reserved for operation output
    let level = if verbose { tracing::Level::INFO } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Usage errors exit 1 like every other failure mode; --help and
    // --version still exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            use clap::error::ErrorKind;
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    };

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // The stub is the reference backend; a networked provider client would
    // be constructed here instead.
    let gateway = StubGateway::new();

    match cli.command {
        Command::Clean {
            input_file,
            output_file,
            model,
        } => {
            let model = model.unwrap_or_else(|| config.model.default.clone());
            ops::run_clean(&gateway, &config, &input_file, &output_file, &model)
        }
        Command::CompareQuick { file_a, file_b, model } => {
            let model = model.unwrap_or_else(|| config.model.default.clone());
            ops::run_compare(&gateway, &config, CompareKind::Quick, &file_a, &file_b, &model)
        }
        Command::CompareDetailed { file_a, file_b, model } => {
            let model = model.unwrap_or_else(|| config.model.default.clone());
            ops::run_compare(&gateway, &config, CompareKind::Detailed, &file_a, &file_b, &model)
        }
    }
}
