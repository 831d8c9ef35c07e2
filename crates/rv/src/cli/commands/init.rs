//! Implementation of `rv init`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rv_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};
use rv_style::{Highlighter, indent_content, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Where `rv init` writes and which template it uses.
enum InitTarget {
    /// `.rv.toml` in the working directory.
    Local(PathBuf),
    /// `~/.rv.toml`.
    Global(PathBuf),
}

impl InitTarget {
    /// Picks the target. Running in the home directory always means the global file.
    fn resolve(ctx: &CommandContext, cmd: &InitCommand) -> Option<Self> {
        let global = global_config_path();
        let in_home = global
            .as_deref()
            .and_then(|p| p.parent())
            .is_some_and(|home| home == ctx.cwd);

        if cmd.global || in_home {
            global.map(Self::Global)
        } else {
            Some(Self::Local(ctx.cwd.join(CONFIG_FILENAME)))
        }
    }

    /// Path of the file to write.
    fn path(&self) -> &Path {
        match self {
            Self::Local(path) | Self::Global(path) => path,
        }
    }

    /// Commented template contents for this target.
    fn template(&self) -> String {
        match self {
            Self::Local(_) => local_template(),
            Self::Global(_) => global_template(),
        }
    }
}

/// Writes a commented `.rv.toml` template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some(target) = InitTarget::resolve(ctx, cmd) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };
    let path = target.path();

    if path.exists() && !cmd.force {
        eprintln!("error: configuration file already exists: {}", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = target.template();
    if let Err(e) = fs::write(path, &template) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", path.display());
    println!();
    println!("{}", subheader("Uncomment the settings you want to change:"));
    println!(
        "{}",
        indent_content(&Highlighter::new().highlight_toml(&template))
    );

    ExitCode::SUCCESS
}
