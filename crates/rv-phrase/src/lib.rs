//! Distinctive phrase extraction ("highlights") per business.
//!
//! The pipeline runs over cleaned tokens (stop words removed):
//!
//! 1. Concatenate each business's words into one sequence, reviews in input order
//! 2. Count contiguous 2- and 3-word phrases per business
//! 3. Keep phrases seen at least twice within the business
//! 4. Rank by TF-IDF (business = document, phrase = term) and keep the top candidates
//! 5. Drop candidates containing a word of the business's own name
//! 6. Greedily select a few word-disjoint phrases, longer phrases first
//!
//! A business for which any step leaves nothing gets an empty highlight list.

#![warn(missing_docs)]

mod ngram;
mod rank;
mod select;

use rv_text::Token;
use serde::Serialize;
use tracing::debug;

pub use ngram::{NGram, business_sequences, count_ngrams};
pub use rank::{DocumentFrequencies, RankedPhrase, rank_tf_idf};
pub use select::{exclude_name_words, select_diverse};

/// Tuning knobs for highlight extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightParams {
    /// Smallest phrase length in words.
    pub ngram_min: usize,
    /// Largest phrase length in words.
    pub ngram_max: usize,
    /// Minimum occurrences within a business for a phrase to survive.
    pub min_count: u32,
    /// Candidates kept per business after TF-IDF ranking.
    pub candidate_limit: usize,
    /// Highlights selected per business.
    pub limit: usize,
}

impl Default for HighlightParams {
    fn default() -> Self {
        Self {
            ngram_min: 2,
            ngram_max: 3,
            min_count: 2,
            candidate_limit: 30,
            limit: 3,
        }
    }
}

/// A selected phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    /// The phrase text.
    pub phrase: String,
    /// Occurrences within the business.
    pub count: u32,
    /// TF-IDF score the phrase was ranked by.
    pub tf_idf: f64,
}

impl From<RankedPhrase> for Highlight {
    fn from(ranked: RankedPhrase) -> Self {
        Self {
            phrase: ranked.ngram.text(),
            count: ranked.ngram.count,
            tf_idf: ranked.tf_idf,
        }
    }
}

/// Highlights selected for one business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessHighlights {
    /// Business name.
    pub business: String,
    /// Up to `limit` word-disjoint phrases.
    pub highlights: Vec<Highlight>,
}

/// Runs the full highlight pipeline over cleaned tokens.
///
/// Every business present in `tokens` appears in the result, in first-seen order.
pub fn extract(tokens: &[Token], params: &HighlightParams) -> Vec<BusinessHighlights> {
    let tables: Vec<(String, Vec<NGram>)> = business_sequences(tokens)
        .into_iter()
        .map(|(business, words)| {
            let ngrams = count_ngrams(
                &business,
                &words,
                params.ngram_min,
                params.ngram_max,
                params.min_count,
            );
            (business, ngrams)
        })
        .collect();

    rank_tf_idf(tables, params.candidate_limit)
        .into_iter()
        .map(|(business, ranked)| {
            let ranked_count = ranked.len();
            let candidates = exclude_name_words(ranked, &business);
            let selected = select_diverse(candidates, params.limit);
            debug!(
                business = %business,
                candidates = ranked_count,
                selected = selected.len(),
                "selected highlights"
            );
            BusinessHighlights {
                highlights: selected.into_iter().map(Highlight::from).collect(),
                business,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rv_corpus::Review;
    use rv_text::{Cleaner, Stopwords};

    use super::*;

    fn tokens(reviews: &[Review]) -> Vec<Token> {
        Cleaner::new(Stopwords::new()).clean_all(reviews)
    }

    fn reviews() -> Vec<Review> {
        vec![
            Review::new("r1", "Angel Oak", "Angel Oak shrimp grits. Fried green tomatoes!"),
            Review::new("r2", "Angel Oak", "Angel Oak shrimp grits and fried green tomatoes."),
            Review::new("r3", "Angel Oak", "pimento cheese pimento cheese"),
            Review::new("r4", "Husk", "Fried chicken skillet cornbread. Fried chicken!"),
            Review::new("r5", "Husk", "skillet cornbread was perfect"),
        ]
    }

    #[test]
    fn test_extracts_disjoint_highlights_without_name_words() {
        let result = extract(&tokens(&reviews()), &HighlightParams::default());
        assert_eq!(result.len(), 2);

        let angel = &result[0];
        assert_eq!(angel.business, "Angel Oak");
        assert!(!angel.highlights.is_empty());
        assert!(angel.highlights.len() <= 3);

        let mut used = HashSet::new();
        for h in &angel.highlights {
            for w in h.phrase.split_whitespace() {
                assert_ne!(w, "angel");
                assert_ne!(w, "oak");
                assert!(used.insert(w.to_string()), "word {w} repeated");
            }
            assert!(h.count >= 2);
        }
    }

    #[test]
    fn test_prefers_trigram_phrase() {
        let result = extract(&tokens(&reviews()), &HighlightParams::default());
        let phrases: Vec<&str> = result[0]
            .highlights
            .iter()
            .map(|h| h.phrase.as_str())
            .collect();
        assert!(phrases.contains(&"fried green tomatoes"), "{phrases:?}");
    }

    #[test]
    fn test_business_without_repeats_has_empty_list() {
        let reviews = vec![
            Review::new("r1", "Husk", "fried chicken fried chicken"),
            Review::new("r2", "FIG", "one pasta dish only"),
        ];
        let result = extract(&tokens(&reviews), &HighlightParams::default());
        assert_eq!(result[1].business, "FIG");
        assert!(result[1].highlights.is_empty());
    }

    #[test]
    fn test_name_filter_runs_after_candidate_cut() {
        let reviews = vec![
            Review::new("r1", "Angel Oak", "Angel Oak angel oak ANGEL OAK"),
            Review::new("r2", "Angel Oak", "pimento cheese pimento cheese"),
            Review::new("r3", "Husk", "fried chicken fried chicken"),
        ];
        let t = tokens(&reviews);

        // "angel oak" ranks first and is the only candidate kept, so nothing survives the
        // name filter and lower-ranked phrases are not promoted in its place
        let params = HighlightParams {
            candidate_limit: 1,
            ..HighlightParams::default()
        };
        let result = extract(&t, &params);
        assert_eq!(result[0].business, "Angel Oak");
        assert!(result[0].highlights.is_empty());
        assert_eq!(result[1].highlights[0].phrase, "fried chicken");

        let result = extract(&t, &HighlightParams::default());
        let phrases: Vec<&str> = result[0]
            .highlights
            .iter()
            .map(|h| h.phrase.as_str())
            .collect();
        assert_eq!(phrases, vec!["pimento cheese"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let t = tokens(&reviews());
        let first = extract(&t, &HighlightParams::default());
        let second = extract(&t, &HighlightParams::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_limit_is_respected() {
        let params = HighlightParams {
            limit: 1,
            ..HighlightParams::default()
        };
        let result = extract(&tokens(&reviews()), &params);
        assert!(result.iter().all(|b| b.highlights.len() <= 1));
    }
}
