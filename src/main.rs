//! ucs - uniform-cost search CLI
//!
//! Finds minimum-cost paths in weighted directed graphs loaded from JSON,
//! YAML, or TOML documents, or in one of the built-in example graphs.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use ucs_core::config::UcsConfig;
use ucs_core::error::{ExitCode as UcsExitCode, UcsError};
use ucs_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap can fail before `Cli.format` exists, so honor a JSON request from argv
            if argv_format_json {
                let ucs_error = match err.kind() {
                    // Help and version are informational, not errors
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::TooManyValues => UcsError::UsageError(err.to_string()),
                    clap::error::ErrorKind::ArgumentConflict => UcsError::DuplicateFormat,
                    _ => UcsError::Other(err.to_string()),
                };

                eprintln!("{}", ucs_error.to_json());
                return ExitCode::from(ucs_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let flag_format = cli.format;

    let config = match UcsConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&e, flag_format.unwrap_or_default(), cli.quiet),
    };
    let format = flag_format.unwrap_or(config.output.format);

    tracing::debug!(elapsed = ?start.elapsed(), "resolve_config");

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(UcsExitCode::Success as u8),
        Err(e) => report_error(&e, format, cli.quiet),
    }
}

fn report_error(e: &UcsError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
