//! Shared context for running CLI commands.

use std::{
    env,
    fmt::Display,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rv::{Analysis, Pipeline};
use rv_config::{Config, discover_config_files};
use rv_corpus::Corpus;
use tracing::debug;

use crate::cli::args::InputArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
    /// Config file given with `--config`, bypassing discovery.
    config_override: Option<PathBuf>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let mut ctx = Self::load_cwd_only(config_override)?;
        let files = ctx.config_files();
        ctx.config = Config::load_from_files(&files).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(ctx)
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init` and `check`, which must work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only(config_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self {
            cwd,
            config: Config::default(),
            config_override,
        })
    }

    /// Returns the config files in effect, highest precedence first.
    pub fn config_files(&self) -> Vec<PathBuf> {
        match self.config_override {
            Some(ref path) => vec![path.clone()],
            None => discover_config_files(&self.cwd),
        }
    }

    /// Loads the review file and runs the configured pipeline.
    ///
    /// With `--business`, the run still covers the whole corpus so phrase ranking compares
    /// against every business; only the results are narrowed.
    pub fn analyze(&self, input: &InputArgs) -> Result<Analysis, ExitCode> {
        let corpus = load_corpus(&input.input)?;

        let business = match input.business {
            Some(ref name) => Some(
                corpus
                    .resolve_business(name)
                    .map(str::to_string)
                    .map_err(|e| fail(&e))?,
            ),
            None => None,
        };

        let pipeline = Pipeline::from_config(&self.config).map_err(|e| fail(&e))?;
        let mut analysis = Analysis::run(&corpus, &pipeline);
        if let Some(ref name) = business {
            debug!(business = %name, "restricting output");
            analysis.retain_business(name);
        }
        Ok(analysis)
    }
}

/// Reads the review CSV or exits with an error.
fn load_corpus(path: &Path) -> Result<Corpus, ExitCode> {
    let corpus = Corpus::from_path(path).map_err(|e| fail(&e))?;
    if corpus.is_empty() {
        eprintln!("warning: {} contains no reviews", path.display());
    }
    Ok(corpus)
}

/// Prints an error and maps it to a failure exit code.
fn fail(e: &dyn Display) -> ExitCode {
    eprintln!("error: {e}");
    ExitCode::FAILURE
}
