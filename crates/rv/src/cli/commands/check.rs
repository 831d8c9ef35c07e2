//! Implementation of `rv check`.

use std::process::ExitCode;

use rv::Pipeline;
use rv_config::{Config, ConfigWarning};
use rv_style::{dim, subheader, warning};

use crate::cli::context::CommandContext;

/// Lists config files in effect, then reports loading errors and validation warnings.
///
/// Exits with failure when any error or warning is found.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = ctx.config_files();
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found; using built-in defaults."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("rv init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let config = match Config::load_from_files(&config_files) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", subheader("Errors (1):"));
            println!("   {}", warning(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        // validation passed, so building the pipeline only fails on file contents
        if let Err(e) = Pipeline::from_config(&config) {
            println!("{}", subheader("Errors (1):"));
            println!("   {}", warning(&e.to_string()));
            return ExitCode::FAILURE;
        }
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::LexiconMissing { .. } | ConfigWarning::LexiconNotFile { .. } => {
                println!(
                    "{}",
                    dim("Hint: lexicon paths are relative to the config file that sets them")
                );
            }
            ConfigWarning::NoAspects | ConfigWarning::EmptyAspect { .. } => {
                println!("{}", dim("Hint: add keywords under [aspects.keywords] in .rv.toml"));
            }
            ConfigWarning::SharedKeyword { .. } => {
                println!("{}", dim("Hint: each keyword may belong to one aspect only"));
            }
            _ => {}
        }
    }
}
