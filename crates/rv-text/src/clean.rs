//! Cleaned token streams.

use rv_corpus::Review;
use serde::Serialize;

use crate::{Stopwords, words};

/// A single cleaned word with a back-reference to its source review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Business the review belongs to.
    pub business: String,
    /// Identifier of the source review.
    pub review_id: String,
    /// The lowercase word.
    pub word: String,
}

/// Splits reviews into words and removes stop words.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    /// Words to drop.
    stopwords: Stopwords,
}

impl Cleaner {
    /// Creates a cleaner using the given stop-word filter.
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Returns the stop-word filter in use.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Cleans a single review, preserving word order.
    pub fn clean(&self, review: &Review) -> Vec<Token> {
        words(&review.text)
            .into_iter()
            .filter(|w| !self.stopwords.contains(w))
            .map(|word| Token {
                business: review.business.clone(),
                review_id: review.review_id.clone(),
                word,
            })
            .collect()
    }

    /// Cleans a sequence of reviews into one flat token stream in input order.
    pub fn clean_all<'a, I>(&self, reviews: I) -> Vec<Token>
    where
        I: IntoIterator<Item = &'a Review>,
    {
        reviews.into_iter().flat_map(|r| self.clean(r)).collect()
    }
}
