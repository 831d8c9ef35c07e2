//! Phrase ranking using TF-IDF.
//!
//! Each business is one document and each surviving phrase is one term:
//! - `tf`: the phrase count divided by the total count of all surviving phrases in the
//!   business
//! - `idf`: `ln(N / df)`, where `N` is the number of businesses with at least one surviving
//!   phrase and `df` the number of those businesses containing this phrase
//!
//! A phrase used by every business scores zero; one unique to a single business scores
//! highest.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use serde::Serialize;

use crate::NGram;

/// A phrase with its TF-IDF components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPhrase {
    /// The counted phrase.
    #[serde(flatten)]
    pub ngram: NGram,
    /// Term frequency within the business.
    pub tf: f64,
    /// Inverse document frequency across businesses.
    pub idf: f64,
    /// `tf * idf`.
    pub tf_idf: f64,
}

impl RankedPhrase {
    /// Creates a ranked phrase from its components.
    pub fn new(ngram: NGram, tf: f64, idf: f64) -> Self {
        Self {
            ngram,
            tf,
            idf,
            tf_idf: tf * idf,
        }
    }

    /// Returns the phrase text.
    pub fn text(&self) -> String {
        self.ngram.text()
    }
}

/// Compares by score descending, then phrase text ascending.
pub fn by_score_desc(a: &RankedPhrase, b: &RankedPhrase) -> Ordering {
    b.tf_idf
        .partial_cmp(&a.tf_idf)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.ngram.words.cmp(&b.ngram.words))
}

/// Document frequencies of phrases across businesses.
#[derive(Debug, Default)]
pub struct DocumentFrequencies {
    /// Businesses with at least one phrase.
    documents: usize,
    /// Phrase words to the number of businesses containing them.
    counts: HashMap<Vec<String>, usize>,
}

impl DocumentFrequencies {
    /// Collects document frequencies from per-business phrase tables.
    pub fn from_tables(tables: &[(String, Vec<NGram>)]) -> Self {
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        let mut documents = 0;
        for (_, ngrams) in tables {
            if ngrams.is_empty() {
                continue;
            }
            documents += 1;
            let distinct: HashSet<&Vec<String>> = ngrams.iter().map(|g| &g.words).collect();
            for words in distinct {
                *counts.entry(words.clone()).or_insert(0) += 1;
            }
        }
        Self { documents, counts }
    }

    /// Returns the number of documents (businesses with phrases).
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Returns `ln(N / df)` for a phrase, or `None` if no business contains it.
    pub fn idf(&self, words: &[String]) -> Option<f64> {
        let df = *self.counts.get(words)?;
        Some((self.documents as f64 / df as f64).ln())
    }
}

/// Ranks each business's phrases by TF-IDF and keeps the top `limit`.
///
/// Businesses keep their input order; those without phrases keep an empty list.
pub fn rank_tf_idf(
    tables: Vec<(String, Vec<NGram>)>,
    limit: usize,
) -> Vec<(String, Vec<RankedPhrase>)> {
    let df = DocumentFrequencies::from_tables(&tables);

    tables
        .into_iter()
        .map(|(business, ngrams)| {
            let total: u32 = ngrams.iter().map(|g| g.count).sum();
            let mut ranked: Vec<RankedPhrase> = ngrams
                .into_iter()
                .filter_map(|ngram| {
                    let idf = df.idf(&ngram.words)?;
                    let tf = f64::from(ngram.count) / f64::from(total);
                    Some(RankedPhrase::new(ngram, tf, idf))
                })
                .collect();
            ranked.sort_by(by_score_desc);
            ranked.truncate(limit);
            (business, ranked)
        })
        .collect()
}
