//! Per-business word sequences and n-gram counting.

use std::collections::{BTreeMap, HashMap};

use rv_text::Token;
use serde::Serialize;

/// A phrase counted within one business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NGram {
    /// Business the phrase was counted in.
    pub business: String,
    /// Words of the phrase.
    pub words: Vec<String>,
    /// Occurrences within the business.
    pub count: u32,
}

impl NGram {
    /// Returns the phrase as a space-separated string.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Returns the number of words in the phrase.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the phrase has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Concatenates each business's cleaned words into one sequence.
///
/// Businesses appear in first-seen order and words keep their token order, so reviews
/// are joined in the order they were read.
pub fn business_sequences(tokens: &[Token]) -> Vec<(String, Vec<String>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sequences: Vec<(String, Vec<String>)> = Vec::new();

    for token in tokens {
        let slot = *index.entry(token.business.as_str()).or_insert_with(|| {
            sequences.push((token.business.clone(), Vec::new()));
            sequences.len() - 1
        });
        sequences[slot].1.push(token.word.clone());
    }

    sequences
}

/// Counts contiguous n-grams of `min_n..=max_n` words and keeps those seen `min_count`
/// times or more.
///
/// Phrases may span the boundary between two reviews since the sequence no longer
/// records where one ends. Lengths beyond the sequence length are never tried. The
/// result is ordered by phrase text.
pub fn count_ngrams(
    business: &str,
    words: &[String],
    min_n: usize,
    max_n: usize,
    min_count: u32,
) -> Vec<NGram> {
    let mut counts: BTreeMap<&[String], u32> = BTreeMap::new();

    for n in min_n.max(1)..=max_n.min(words.len()) {
        for window in words.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }

    let mut ngrams: Vec<NGram> = counts
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .map(|(words, count)| NGram {
            business: business.to_string(),
            words: words.to_vec(),
            count,
        })
        .collect();
    ngrams.sort_by_key(NGram::text);
    ngrams
}
