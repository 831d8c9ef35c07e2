//! Configuration file parsing.
//!
//! Parses individual `.rv.toml` files into intermediate `RawConfig` structures that keep
//! every field optional until merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Tokenizer settings.
    pub text: Option<RawTextSettings>,
    /// Aspect tagging settings.
    pub aspects: Option<RawAspectSettings>,
    /// Highlight extraction settings.
    pub highlights: Option<RawHighlightSettings>,
}

/// Raw `[text]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawTextSettings {
    /// Terms filtered in addition to English stop words. Replaces the built-in list.
    pub extra_stopwords: Option<Vec<String>>,
}

/// Raw `[aspects]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawAspectSettings {
    /// Words kept on each side of a keyword.
    pub window: Option<usize>,
    /// Path to a polarity lexicon file.
    pub lexicon: Option<String>,
    /// Aspect name to keyword(s). Replaces the built-in dictionary.
    ///
    /// Each value accepts either a single string or an array of strings.
    #[serde_as(as = "Option<BTreeMap<_, OneOrMany<_>>>")]
    pub keywords: Option<BTreeMap<String, Vec<String>>>,
}

/// Raw `[highlights]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawHighlightSettings {
    /// Shortest phrase length in words.
    pub ngram_min: Option<usize>,
    /// Longest phrase length in words.
    pub ngram_max: Option<usize>,
    /// Minimum occurrences within a business.
    pub min_count: Option<u32>,
    /// Candidates kept after TF-IDF ranking.
    pub candidates: Option<usize>,
    /// Highlights selected per business.
    pub limit: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
