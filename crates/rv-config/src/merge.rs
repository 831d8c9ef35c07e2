//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    AspectSettings, Config, ConfigError, HighlightSettings, TextSettings,
    parse::{RawAspectSettings, RawConfig, RawHighlightSettings, RawTextSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// the working directory), lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: the highest-precedence defined value wins
/// - `extra_stopwords` and `keywords`: replaced wholesale, never combined
/// - `lexicon`: resolved relative to the file that defines it
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut text = TextSettings::default();
    let mut aspects = AspectSettings::default();
    let mut highlights = HighlightSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.text {
            apply_raw_text(&mut text, raw);
        }
        if let Some(ref raw) = parsed.config.aspects {
            apply_raw_aspects(&mut aspects, raw, parsed.dir())?;
        }
        if let Some(ref raw) = parsed.config.highlights {
            apply_raw_highlights(&mut highlights, raw);
        }
    }

    Ok(Config {
        text,
        aspects,
        highlights,
    })
}

/// Applies a raw `[text]` section.
fn apply_raw_text(result: &mut TextSettings, raw: &RawTextSettings) {
    if let Some(ref v) = raw.extra_stopwords {
        result.extra_stopwords = v.clone();
    }
}

/// Applies a raw `[aspects]` section, resolving the lexicon path against `config_dir`.
fn apply_raw_aspects(
    result: &mut AspectSettings,
    raw: &RawAspectSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.window {
        result.window = v;
    }
    if let Some(ref v) = raw.lexicon {
        result.lexicon = Some(resolve_path(v, config_dir)?);
    }
    if let Some(ref v) = raw.keywords {
        result.keywords = v.clone();
    }
    Ok(())
}

/// Applies a raw `[highlights]` section.
fn apply_raw_highlights(result: &mut HighlightSettings, raw: &RawHighlightSettings) {
    if let Some(v) = raw.ngram_min {
        result.ngram_min = v;
    }
    if let Some(v) = raw.ngram_max {
        result.ngram_max = v;
    }
    if let Some(v) = raw.min_count {
        result.min_count = v;
    }
    if let Some(v) = raw.candidates {
        result.candidates = v;
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}
