//! Clap argument definitions for the `rv` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "rv")]
#[command(about = "Aspect sentiment tags and highlight phrases from restaurant reviews")]
pub struct Cli {
    #[command(flatten)]
    /// Flags accepted by every subcommand.
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read this config file instead of discovering .rv.toml files
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Review input shared by the analysis commands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Review CSV with business, review_id and review columns
    pub input: PathBuf,

    /// Only show this business (exact name, or first case-insensitive match)
    #[arg(short = 'b', long)]
    pub business: Option<String>,
}

/// Arguments for `rv report`.
#[derive(Args, Debug, Clone)]
pub struct ReportCommand {
    #[command(flatten)]
    /// Review input.
    pub input: InputArgs,

    /// Output in JSON format
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Output a standalone HTML page
    #[arg(long)]
    pub html: bool,
}

/// Arguments for `rv aspects`.
#[derive(Args, Debug, Clone)]
pub struct AspectsCommand {
    #[command(flatten)]
    /// Review input.
    pub input: InputArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Also list every context window with its score
    #[arg(short = 'w', long)]
    pub windows: bool,
}

/// Arguments for `rv highlights`.
#[derive(Args, Debug, Clone)]
pub struct HighlightsCommand {
    #[command(flatten)]
    /// Review input.
    pub input: InputArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `rv init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.rv.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `rv` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Per-business aspect tags and highlight bullets
    Report(ReportCommand),

    /// Net sentiment per business and aspect
    Aspects(AspectsCommand),

    /// Distinctive phrases per business
    Highlights(HighlightsCommand),

    /// Show effective configuration
    Config,

    /// Initialize rv configuration in current directory
    Init(InitCommand),

    /// Validate configuration and diagnose issues
    Check,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_report_with_business() {
        let cli = Cli::try_parse_from(["rv", "report", "reviews.csv", "-b", "Husk", "--json"])
            .unwrap();
        let Commands::Report(cmd) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(cmd.input.input, PathBuf::from("reviews.csv"));
        assert_eq!(cmd.input.business.as_deref(), Some("Husk"));
        assert!(cmd.json);
        assert!(!cmd.html);
    }

    #[test]
    fn test_json_and_html_conflict() {
        let result = Cli::try_parse_from(["rv", "report", "r.csv", "--json", "--html"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rv", "aspects", "r.csv", "-vv", "-c", "my.toml"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["rv", "check", "-q", "-v"]).is_err());
    }
}
