//! Implementation of `rv aspects`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use rv::Analysis;
use rv_style::{dim, signed, subheader};

use crate::cli::{args::AspectsCommand, context::CommandContext, output::print_json};

/// Prints net sentiment per (business, aspect), optionally with every window.
pub fn run(ctx: &CommandContext, cmd: &AspectsCommand) -> ExitCode {
    let analysis = match ctx.analyze(&cmd.input) {
        Ok(analysis) => analysis,
        Err(code) => return code,
    };

    if cmd.json {
        return if cmd.windows {
            print_json(&analysis.aspects)
        } else {
            print_json(&analysis.aspects.sentiments)
        };
    }

    if analysis.aspects.sentiments.is_empty() {
        println!("{}", dim("No aspect mentions found."));
        return ExitCode::SUCCESS;
    }

    print_sentiments(&analysis);
    if cmd.windows {
        println!();
        print_windows(&analysis);
    }
    ExitCode::SUCCESS
}

/// Prints one row per (business, aspect).
fn print_sentiments(analysis: &Analysis) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Business", "Aspect", "Positive", "Negative", "Net", "Windows", "+/-/=",
    ]);
    for row in &analysis.aspects.sentiments {
        table.add_row(vec![
            Cell::new(&row.business),
            Cell::new(&row.aspect),
            Cell::new(row.positive.to_string()),
            Cell::new(row.negative.to_string()),
            Cell::new(signed(row.net_sentiment)),
            Cell::new(row.windows.total().to_string()),
            Cell::new(format!(
                "{}/{}/{}",
                row.windows.positive, row.windows.negative, row.windows.neutral
            )),
        ]);
    }
    println!("{table}");
}

/// Prints every context window with its lexicon counts and label.
fn print_windows(analysis: &Analysis) {
    println!(
        "{}",
        subheader(&format!("Windows ({}):", analysis.aspects.windows.len()))
    );
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Business", "Review", "Aspect", "Window", "+", "-", "Label"]);
    for scored in &analysis.aspects.windows {
        let w = &scored.window;
        table.add_row(vec![
            Cell::new(&w.business),
            Cell::new(&w.review_id),
            Cell::new(&w.aspect),
            Cell::new(&scored.snippet),
            Cell::new(scored.score.positive.to_string()),
            Cell::new(scored.score.negative.to_string()),
            Cell::new(scored.label.to_string()),
        ]);
    }
    println!("{table}");
}
