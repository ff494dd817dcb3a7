//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use ucs_core::config::UcsConfig;
use ucs_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a UcsConfig,
    /// `--format` when given, otherwise the configured format
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a UcsConfig, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("ucs {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Uniform-cost search for minimum-cost paths in weighted directed graphs.");
        println!();
        println!("Run `ucs --help` for usage information.");
        Ok(())
    }
}
