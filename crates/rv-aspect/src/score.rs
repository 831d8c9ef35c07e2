//! Lexicon scoring of context windows.

use std::{cmp::Ordering, fmt};

use rv_text::words;
use serde::Serialize;

use crate::{ContextWindow, Lexicon, Polarity};

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// More positive than negative evidence.
    Positive,
    /// More negative than positive evidence.
    Negative,
    /// Equal evidence, including none at all.
    Neutral,
}

impl SentimentLabel {
    /// Labels a pair of polarity counts. Ties are neutral.
    pub fn from_counts(positive: u32, negative: u32) -> Self {
        match positive.cmp(&negative) {
            Ordering::Greater => Self::Positive,
            Ordering::Less => Self::Negative,
            Ordering::Equal => Self::Neutral,
        }
    }

    /// Labels a signed net score by its sign.
    pub fn from_net(net: i64) -> Self {
        match net {
            n if n > 0 => Self::Positive,
            n if n < 0 => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Lexicon match counts for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowScore {
    /// Number of positive lexicon words.
    pub positive: u32,
    /// Number of negative lexicon words.
    pub negative: u32,
}

impl WindowScore {
    /// Returns the three-way label for this window.
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_counts(self.positive, self.negative)
    }

    /// Returns true if any lexicon word matched.
    pub fn has_matches(&self) -> bool {
        self.positive + self.negative > 0
    }
}

/// Scores a window by re-tokenizing its snippet and counting lexicon matches.
///
/// The keyword itself is part of the snippet, so a keyword that is also a lexicon word
/// contributes to the score.
pub fn score_window(window: &ContextWindow, lexicon: &Lexicon) -> WindowScore {
    let mut score = WindowScore::default();
    for word in words(&window.snippet()) {
        match lexicon.polarity(&word) {
            Some(Polarity::Positive) => score.positive += 1,
            Some(Polarity::Negative) => score.negative += 1,
            None => {}
        }
    }
    score
}

/// A context window together with its score and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredWindow {
    /// The context window.
    #[serde(flatten)]
    pub window: ContextWindow,
    /// The window's snippet text.
    pub snippet: String,
    /// Lexicon match counts.
    pub score: WindowScore,
    /// Three-way label derived from the counts.
    pub label: SentimentLabel,
}

impl ScoredWindow {
    /// Scores a window against a lexicon.
    pub fn new(window: ContextWindow, lexicon: &Lexicon) -> Self {
        let score = score_window(&window, lexicon);
        Self {
            snippet: window.snippet(),
            label: score.label(),
            score,
            window,
        }
    }
}
