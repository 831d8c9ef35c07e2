//! rv: aspect sentiment and highlight phrases from restaurant reviews.
//!
//! Reviews are read from a CSV file and pass through two independent analyses:
//!
//! - **Aspect tagging**: keyword-in-context windows around service, food, price and
//!   environment terms are scored against a polarity lexicon and summed into a net
//!   sentiment per business and aspect
//! - **Highlights**: recurring two- and three-word phrases are ranked by TF-IDF across
//!   businesses and a few word-disjoint ones are kept per business
//!
//! The [`report`] module turns both into one tag list and one bullet list per business.

#![warn(missing_docs)]

pub mod pipeline;
pub mod report;

pub use pipeline::{Analysis, BusinessSummary, Pipeline, PipelineError};
pub use report::{AspectTag, BusinessReport, build_reports, render_html, render_json, render_text};
