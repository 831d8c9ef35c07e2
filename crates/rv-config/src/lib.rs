//! Configuration system for rv.
//!
//! rv uses TOML configuration files named `.rv.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.rv.toml` files
//! found, then loading `~/.rv.toml` as the global config with lowest precedence.
//!
//! Every setting has a built-in default, so running without any config file analyzes with
//! the stock Charleston stop words, the four-aspect dictionary and the bundled lexicon.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawAspectSettings, RawConfig, RawHighlightSettings, RawTextSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_path;
use rv_aspect::{DEFAULT_ASPECTS, DEFAULT_RADIUS};
use rv_phrase::HighlightParams;
use rv_text::DEFAULT_LOCATION_TERMS;
use serde::Serialize;
pub use templates::{global_template, local_template};
use tracing::debug;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for rv.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tokenizer settings.
    pub text: TextSettings,
    /// Aspect tagging settings.
    pub aspects: AspectSettings,
    /// Highlight extraction settings.
    pub highlights: HighlightSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.rv.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        debug!(files = ?config_files, "discovered config files");
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A configured lexicon file that is missing or not a file
    /// - Aspects without keywords, or no aspects at all
    /// - Keywords listed under more than one aspect
    /// - An empty n-gram length range and zero highlight limits
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.rv.toml` file, with the lexicon path shown
    /// resolved.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            text: &self.text,
            aspects: &self.aspects,
            highlights: &self.highlights,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Settings for tokenizing and cleaning review text.
#[derive(Debug, Clone, Serialize)]
pub struct TextSettings {
    /// Terms filtered in addition to English stop words.
    pub extra_stopwords: Vec<String>,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            extra_stopwords: DEFAULT_LOCATION_TERMS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// Settings for aspect tagging.
#[derive(Debug, Clone, Serialize)]
pub struct AspectSettings {
    /// Words kept on each side of a keyword.
    pub window: usize,
    /// Polarity lexicon file. `None` uses the bundled lexicon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
    /// Aspect name to keywords.
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            window: DEFAULT_RADIUS,
            lexicon: None,
            keywords: DEFAULT_ASPECTS
                .iter()
                .map(|(aspect, keywords)| {
                    (
                        (*aspect).to_string(),
                        keywords.iter().map(|k| (*k).to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

/// Settings for highlight extraction.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightSettings {
    /// Shortest phrase length in words.
    pub ngram_min: usize,
    /// Longest phrase length in words.
    pub ngram_max: usize,
    /// Minimum occurrences within a business.
    pub min_count: u32,
    /// Candidates kept after TF-IDF ranking.
    pub candidates: usize,
    /// Highlights selected per business.
    pub limit: usize,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        let params = HighlightParams::default();
        Self {
            ngram_min: params.ngram_min,
            ngram_max: params.ngram_max,
            min_count: params.min_count,
            candidates: params.candidate_limit,
            limit: params.limit,
        }
    }
}

impl HighlightSettings {
    /// Returns the extraction parameters these settings describe.
    pub fn params(&self) -> HighlightParams {
        HighlightParams {
            ngram_min: self.ngram_min,
            ngram_max: self.ngram_max,
            min_count: self.min_count,
            candidate_limit: self.candidates,
            limit: self.limit,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Tokenizer settings.
    text: &'a TextSettings,
    /// Aspect tagging settings.
    aspects: &'a AspectSettings,
    /// Highlight extraction settings.
    highlights: &'a HighlightSettings,
}
