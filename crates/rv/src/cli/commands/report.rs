//! Implementation of `rv report`.

use std::process::ExitCode;

use rv::{build_reports, render_html, render_json, render_text};

use crate::cli::{args::ReportCommand, context::CommandContext};

/// Prints aspect tags and highlights for each business.
pub fn run(ctx: &CommandContext, cmd: &ReportCommand) -> ExitCode {
    let analysis = match ctx.analyze(&cmd.input) {
        Ok(analysis) => analysis,
        Err(code) => return code,
    };
    let reports = build_reports(&analysis);

    if cmd.json {
        match render_json(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else if cmd.html {
        print!("{}", render_html(&reports));
    } else {
        print!("{}", render_text(&reports));
    }
    ExitCode::SUCCESS
}
