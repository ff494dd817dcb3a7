//! Command implementations for all ucs commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, demo, search};
use ucs_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Check(args) => check::execute(ctx, args),
            Commands::Demo(args) => demo::execute(ctx, args),
        }
    }
}
