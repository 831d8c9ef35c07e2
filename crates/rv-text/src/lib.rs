//! Tokenization and cleaning of review text.
//!
//! Two token streams come out of this crate:
//!
//! - **Unfiltered words** ([`words`]): every lowercase word in a review, stop words included.
//!   Keyword-in-context windows are cut from this stream so they see real neighbours.
//! - **Cleaned tokens** ([`Cleaner`]): the same words with stop words removed, each carrying
//!   a back-reference to its review and business. Phrase extraction runs on these.

#![warn(missing_docs)]

mod clean;
mod stopwords;
mod tokenize;

pub use clean::{Cleaner, Token};
pub use stopwords::{DEFAULT_LOCATION_TERMS, Stopwords};
pub use tokenize::words;
