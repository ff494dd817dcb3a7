//! Command dispatch logic for ucs

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use tracing::debug;
use ucs_core::config::UcsConfig;
use ucs_core::error::Result;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &UcsConfig, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), %format, "dispatch");

    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
