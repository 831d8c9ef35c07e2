//! Implementation of `rv highlights`.

use std::process::ExitCode;

use rv_phrase::Highlight;
use rv_style::{dim, header};
use serde::Serialize;

use crate::cli::{args::HighlightsCommand, context::CommandContext, output::print_json};

/// JSON output for one business.
#[derive(Serialize)]
struct JsonHighlights<'a> {
    /// Business name.
    business: &'a str,
    /// Selected phrases with their scores.
    highlights: &'a [Highlight],
}

/// Prints the selected phrases for each business with their counts and scores.
pub fn run(ctx: &CommandContext, cmd: &HighlightsCommand) -> ExitCode {
    let analysis = match ctx.analyze(&cmd.input) {
        Ok(analysis) => analysis,
        Err(code) => return code,
    };

    if cmd.json {
        let rows: Vec<JsonHighlights<'_>> = analysis
            .businesses
            .iter()
            .map(|b| JsonHighlights {
                business: &b.name,
                highlights: analysis.highlights_for(&b.name),
            })
            .collect();
        return print_json(&rows);
    }

    for (i, business) in analysis.businesses.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", header(&business.name));
        let highlights = analysis.highlights_for(&business.name);
        if highlights.is_empty() {
            println!("  {}", dim("no highlights"));
        }
        for h in highlights {
            println!(
                "  • {} {}",
                h.phrase,
                dim(&format!("(count {}, tf-idf {:.4})", h.count, h.tf_idf))
            );
        }
    }
    ExitCode::SUCCESS
}
