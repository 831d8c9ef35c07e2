//! Error types for corpus loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or querying a review corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to open the review file.
    #[error("failed to read review file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The review data is not valid CSV or lacks a required column.
    #[error("malformed review data: {source}")]
    Csv {
        /// Underlying CSV error.
        #[from]
        source: csv::Error,
    },

    /// Two rows share a review identifier.
    #[error("duplicate review_id: {review_id}")]
    DuplicateReviewId {
        /// The repeated identifier.
        review_id: String,
    },

    /// No reviews exist for the requested business.
    #[error("business not found: {business}")]
    BusinessNotFound {
        /// The name that was looked up.
        business: String,
    },
}
