//! Stop-word filtering for review text.
//!
//! The filter combines:
//! - Standard English stop words from the `stop-words` crate
//! - A list of location terms for the dataset's home city
//!
//! Location terms show up in nearly every review of a local restaurant ("best brunch in
//! Charleston") and would otherwise dominate phrase extraction.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// Location terms for the Charleston, SC sample dataset.
///
/// Used when configuration does not supply its own list.
pub const DEFAULT_LOCATION_TERMS: &[&str] = &[
    "charleston",
    "sc",
    "south",
    "carolina",
    "downtown",
    "king",
    "street",
    "st",
    "mount",
    "mt",
    "pleasant",
    "folly",
    "beach",
    "island",
    "west",
    "ashley",
];

/// A case-insensitive stop-word filter.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stop words.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter with English stop words and the default location terms.
    pub fn new() -> Self {
        Self::with_extra(DEFAULT_LOCATION_TERMS.iter().copied())
    }

    /// Creates a filter with English stop words plus the given extra terms.
    ///
    /// The extra terms replace the default location list rather than adding to it.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> = stop_words::get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        words.extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        Self { words }
    }

    /// Checks if a word is a stop word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Returns the total number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stop words are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
