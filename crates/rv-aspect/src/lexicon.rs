//! Binary polarity lexicon.

use std::{collections::HashMap, fmt, fs, path::Path, str};

use serde::Serialize;
use tracing::debug;

use crate::AspectError;

/// Bundled English polarity word list.
const BUILTIN_LEXICON: &str = include_str!("../data/polarity.csv");

/// Polarity of a lexicon word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Word expresses approval.
    Positive,
    /// Word expresses disapproval.
    Negative,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

impl str::FromStr for Polarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" | "+" => Ok(Self::Positive),
            "negative" | "neg" | "-" => Ok(Self::Negative),
            _ => Err(format!(
                "unknown polarity '{s}', expected positive or negative"
            )),
        }
    }
}

/// A read-only word to polarity mapping.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Lowercase word to polarity.
    words: HashMap<String, Polarity>,
}

impl Lexicon {
    /// Returns the bundled English lexicon.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_LEXICON, "built-in lexicon").expect("built-in lexicon is well-formed")
    }

    /// Loads a lexicon file.
    ///
    /// See [`Lexicon::parse`] for the format.
    pub fn from_path(path: &Path) -> Result<Self, AspectError> {
        let contents = fs::read_to_string(path).map_err(|source| AspectError::ReadLexicon {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&contents, &path.display().to_string())?;
        debug!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Parses lexicon rows of the form `word,positive` or `word,negative`.
    ///
    /// An optional `word,sentiment` header row is skipped. Lines starting with `#` and
    /// blank lines are ignored. When a word appears twice, the later row wins. `origin`
    /// names the source in error messages.
    pub fn parse(contents: &str, origin: &str) -> Result<Self, AspectError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let mut words = HashMap::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| AspectError::ParseLexicon {
                origin: origin.to_string(),
                line: e.position().map_or(index as u64 + 1, |p| p.line()),
                message: e.to_string(),
            })?;
            let line = record.position().map_or(index as u64 + 1, |p| p.line());

            let (Some(word), Some(polarity), None) = (record.get(0), record.get(1), record.get(2))
            else {
                return Err(AspectError::ParseLexicon {
                    origin: origin.to_string(),
                    line,
                    message: format!("expected 2 fields, found {}", record.len()),
                });
            };
            if index == 0 && word.eq_ignore_ascii_case("word") {
                continue;
            }
            let parsed = polarity.parse::<Polarity>();
            let polarity = parsed.map_err(|message| AspectError::ParseLexicon {
                origin: origin.to_string(),
                line,
                message,
            })?;
            words.insert(word.to_lowercase(), polarity);
        }

        Ok(Self { words })
    }

    /// Builds a lexicon from `(word, polarity)` pairs.
    pub fn from_entries<S: AsRef<str>>(entries: impl IntoIterator<Item = (S, Polarity)>) -> Self {
        Self {
            words: entries
                .into_iter()
                .map(|(w, p)| (w.as_ref().to_lowercase(), p))
                .collect(),
        }
    }

    /// Looks up the polarity of a lowercase word.
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        self.words.get(word).copied()
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
