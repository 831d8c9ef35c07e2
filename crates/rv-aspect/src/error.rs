//! Error types for aspect tagging.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when building a dictionary or loading a lexicon.
#[derive(Debug, Error)]
pub enum AspectError {
    /// A keyword is listed under more than one aspect.
    #[error("keyword '{keyword}' is listed under both '{first}' and '{second}'")]
    DuplicateKeyword {
        /// The shared keyword.
        keyword: String,
        /// Aspect that claimed the keyword first.
        first: String,
        /// Aspect that repeated it.
        second: String,
    },

    /// A keyword contains no words after tokenization.
    #[error("aspect '{aspect}' has a keyword with no words: '{keyword}'")]
    EmptyKeyword {
        /// Aspect the keyword belongs to.
        aspect: String,
        /// The offending keyword as written.
        keyword: String,
    },

    /// Failed to read a lexicon file.
    #[error("failed to read lexicon {path}: {source}")]
    ReadLexicon {
        /// Path to the lexicon file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A lexicon row could not be parsed.
    #[error("invalid lexicon entry in {origin} at line {line}: {message}")]
    ParseLexicon {
        /// File path or other description of the lexicon source.
        origin: String,
        /// 1-based line number.
        line: u64,
        /// What was wrong with the row.
        message: String,
    },
}
