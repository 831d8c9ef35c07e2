//! Aspect sentiment tagging.
//!
//! For each review, every occurrence of an aspect keyword is located in the unfiltered word
//! stream and cut out together with up to `radius` neighbouring words on each side. Each
//! such context window is scored against a binary polarity lexicon, and the raw match
//! counts are summed per (business, aspect) into a net sentiment.
//!
//! Summing raw counts means a single review with many polarity words weighs more than
//! several terse ones. Per-window labels are kept alongside so callers can see both views.

#![warn(missing_docs)]

mod aggregate;
mod dictionary;
mod error;
mod lexicon;
mod score;
mod window;

pub use aggregate::{AspectAnalysis, AspectSentiment, LabelCounts, aggregate, analyze};
pub use dictionary::{AspectDictionary, DEFAULT_ASPECTS};
pub use error::AspectError;
pub use lexicon::{Lexicon, Polarity};
pub use score::{ScoredWindow, SentimentLabel, WindowScore, score_window};
pub use window::{ContextWindow, DEFAULT_RADIUS, Tagger};
