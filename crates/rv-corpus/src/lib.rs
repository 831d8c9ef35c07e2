//! Review corpus loading for rv.
//!
//! A corpus is an immutable, ordered collection of reviews read from a CSV file with at
//! least the columns `business`, `review_id` and `review`. Extra columns are ignored.
//! Order matters downstream: phrase extraction concatenates each business's reviews in
//! the order they appear in the file.

#![warn(missing_docs)]

mod error;

use std::{collections::HashSet, fs::File, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::CorpusError;

/// A single review. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Unique review identifier.
    pub review_id: String,
    /// Name of the reviewed restaurant.
    pub business: String,
    /// Raw review text.
    pub text: String,
}

impl Review {
    /// Creates a review.
    pub fn new(
        review_id: impl Into<String>,
        business: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            review_id: review_id.into(),
            business: business.into(),
            text: text.into(),
        }
    }
}

/// One CSV row as it appears on disk.
#[derive(Debug, Deserialize)]
struct ReviewRecord {
    /// Restaurant name column.
    business: String,
    /// Review identifier column.
    review_id: String,
    /// Free-text review column.
    review: String,
}

impl From<ReviewRecord> for Review {
    fn from(record: ReviewRecord) -> Self {
        Self {
            review_id: record.review_id,
            business: record.business,
            text: record.review,
        }
    }
}

/// An ordered collection of reviews.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Reviews in input order.
    reviews: Vec<Review>,
    /// Distinct business names in first-seen order.
    businesses: Vec<String>,
}

impl Corpus {
    /// Builds a corpus from reviews, rejecting duplicate review identifiers.
    pub fn from_reviews(reviews: Vec<Review>) -> Result<Self, CorpusError> {
        let mut ids = HashSet::new();
        let mut seen = HashSet::new();
        let mut businesses = Vec::new();

        for review in &reviews {
            if !ids.insert(review.review_id.as_str()) {
                return Err(CorpusError::DuplicateReviewId {
                    review_id: review.review_id.clone(),
                });
            }
            if seen.insert(review.business.as_str()) {
                businesses.push(review.business.clone());
            }
        }

        Ok(Self {
            reviews,
            businesses,
        })
    }

    /// Loads a corpus from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let file = File::open(path).map_err(|source| CorpusError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            reviews = corpus.len(),
            businesses = corpus.businesses.len(),
            "loaded review corpus"
        );
        Ok(corpus)
    }

    /// Loads a corpus from CSV data with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let reviews = csv
            .deserialize::<ReviewRecord>()
            .map(|row| row.map(Review::from))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_reviews(reviews)
    }

    /// Returns all reviews in input order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Returns distinct business names in first-seen order.
    pub fn businesses(&self) -> &[String] {
        &self.businesses
    }

    /// Returns the number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Returns true if the corpus holds no reviews.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Resolves a business name as stored in the corpus.
    ///
    /// Exact matches win; otherwise the first case-insensitive match in first-seen order is
    /// returned, even when several businesses differ only by case.
    pub fn resolve_business(&self, name: &str) -> Result<&str, CorpusError> {
        self.businesses
            .iter()
            .find(|b| b.as_str() == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                self.businesses.iter().find(|b| b.to_lowercase() == lower)
            })
            .map(String::as_str)
            .ok_or_else(|| CorpusError::BusinessNotFound {
                business: name.to_string(),
            })
    }

    /// Returns the reviews of one business in input order.
    pub fn reviews_for(&self, name: &str) -> Result<Vec<&Review>, CorpusError> {
        let business = self.resolve_business(name)?;
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.business == business)
            .collect())
    }

    /// Returns a corpus containing only the reviews of one business.
    pub fn restrict_to(&self, name: &str) -> Result<Self, CorpusError> {
        let reviews = self.reviews_for(name)?.into_iter().cloned().collect();
        Self::from_reviews(reviews)
    }
}
