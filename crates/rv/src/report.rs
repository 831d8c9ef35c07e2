//! Report rendering: one tag list and one highlight list per business.
//!
//! Tags are sorted by net sentiment, most positive first, with ties broken by aspect
//! name. Each tag carries the tone implied by its sign. Three renderers share the same
//! [`BusinessReport`] rows: ANSI text for the terminal, a standalone HTML page, and JSON.

use rv_aspect::SentimentLabel;
use rv_style::{dim, header, signed, tone};
use serde::Serialize;

use crate::Analysis;

/// One aspect tag in a business report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectTag {
    /// Aspect name.
    pub aspect: String,
    /// Positive minus negative lexicon matches.
    pub net_sentiment: i64,
    /// Tone derived from the sign of `net_sentiment`.
    pub tone: SentimentLabel,
}

/// Presentation rows for a single business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessReport {
    /// Business name.
    pub business: String,
    /// Number of reviews analyzed.
    pub reviews: usize,
    /// Aspect tags, most positive first.
    pub tags: Vec<AspectTag>,
    /// Highlight phrases in selection order.
    pub highlights: Vec<String>,
}

/// Builds report rows for every business in the analysis, in first-seen order.
pub fn build_reports(analysis: &Analysis) -> Vec<BusinessReport> {
    analysis
        .businesses
        .iter()
        .map(|summary| {
            let mut tags: Vec<AspectTag> = analysis
                .aspects
                .for_business(&summary.name)
                .map(|s| AspectTag {
                    aspect: s.aspect.clone(),
                    net_sentiment: s.net_sentiment,
                    tone: s.label(),
                })
                .collect();
            tags.sort_by(|a, b| {
                b.net_sentiment
                    .cmp(&a.net_sentiment)
                    .then_with(|| a.aspect.cmp(&b.aspect))
            });

            BusinessReport {
                business: summary.name.clone(),
                reviews: summary.reviews,
                tags,
                highlights: analysis
                    .highlights_for(&summary.name)
                    .iter()
                    .map(|h| h.phrase.clone())
                    .collect(),
            }
        })
        .collect()
}

/// Renders reports as colored terminal text.
pub fn render_text(reports: &[BusinessReport]) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let count = format!("({} reviews)", report.reviews);
        out.push_str(&format!("{} {}\n", header(&report.business), dim(&count)));

        if report.tags.is_empty() {
            out.push_str(&format!("  {}\n", dim("no aspect mentions")));
        } else {
            let tags: Vec<String> = report
                .tags
                .iter()
                .map(|t| {
                    let label = format!("[{} {}]", t.aspect, signed(t.net_sentiment));
                    tone(&label, t.net_sentiment)
                })
                .collect();
            out.push_str(&format!("  {}\n", tags.join(" ")));
        }

        if report.highlights.is_empty() {
            out.push_str(&format!("  {}\n", dim("no highlights")));
        }
        for phrase in &report.highlights {
            out.push_str(&format!("  • {phrase}\n"));
        }
    }
    out
}

/// Renders reports as pretty-printed JSON.
pub fn render_json(reports: &[BusinessReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Stylesheet embedded in HTML reports.
const HTML_STYLE: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; color: #222; }
section { border-bottom: 1px solid #ddd; padding: 0.5rem 0 1rem; }
h2 { margin-bottom: 0.25rem; }
.count { color: #888; font-size: 0.9rem; }
.tag { display: inline-block; border-radius: 0.75rem; padding: 0.1rem 0.6rem; margin: 0.15rem; }
.positive { background: #d4f4dd; color: #1b5e20; }
.negative { background: #fbdada; color: #b71c1c; }
.neutral { background: #eee; color: #555; }
";

/// Renders reports as a standalone HTML page.
pub fn render_html(reports: &[BusinessReport]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Review highlights</title>\n");
    out.push_str(&format!("<style>\n{HTML_STYLE}</style>\n"));
    out.push_str("</head>\n<body>\n");

    for report in reports {
        out.push_str("<section class=\"business\">\n");
        out.push_str(&format!(
            "<h2>{} <span class=\"count\">({} reviews)</span></h2>\n",
            escape_html(&report.business),
            report.reviews
        ));

        out.push_str("<p class=\"tags\">");
        for tag in &report.tags {
            out.push_str(&format!(
                "<span class=\"tag {}\">{} {}</span>",
                tone_class(tag.tone),
                escape_html(&tag.aspect),
                signed(tag.net_sentiment)
            ));
        }
        out.push_str("</p>\n");

        out.push_str("<ul class=\"highlights\">\n");
        for phrase in &report.highlights {
            out.push_str(&format!("<li>{}</li>\n", escape_html(phrase)));
        }
        out.push_str("</ul>\n</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// CSS class for a tone.
fn tone_class(tone: SentimentLabel) -> &'static str {
    match tone {
        SentimentLabel::Positive => "positive",
        SentimentLabel::Negative => "negative",
        SentimentLabel::Neutral => "neutral",
    }
}

/// Escapes text for inclusion in HTML element content and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
