//! Command implementations and dispatch.

pub mod aspects;
pub mod check;
pub mod config;
pub mod highlights;
pub mod init;
pub mod report;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Report(cmd) => report::run(ctx, &cmd),
        Commands::Aspects(cmd) => aspects::run(ctx, &cmd),
        Commands::Highlights(cmd) => highlights::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
    }
}
