//! Configuration validation.
//!
//! Checks a loaded configuration and reports warnings for settings that would make an
//! analysis fail or come out empty.

use std::{collections::HashMap, fmt};

use rv_text::words;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The configured lexicon file does not exist.
    LexiconMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The configured lexicon path is not a regular file.
    LexiconNotFile {
        /// Offending path.
        path: String,
    },
    /// No aspects are defined.
    NoAspects,
    /// An aspect has no usable keywords.
    EmptyAspect {
        /// Name of the aspect.
        aspect: String,
    },
    /// A keyword is listed under two aspects.
    SharedKeyword {
        /// The keyword, normalized.
        keyword: String,
        /// Aspect that lists it first.
        first: String,
        /// Aspect that lists it again.
        second: String,
    },
    /// The n-gram length range is empty.
    InvalidNgramRange {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A limit is zero, so nothing would be produced.
    ZeroLimit {
        /// Setting name, e.g. `highlights.limit`.
        setting: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexiconMissing { path } => write!(f, "lexicon file does not exist: {path}"),
            Self::LexiconNotFile { path } => write!(f, "lexicon path is not a file: {path}"),
            Self::NoAspects => write!(f, "no aspects are defined in configuration"),
            Self::EmptyAspect { aspect } => write!(f, "aspect '{aspect}' has no keywords"),
            Self::SharedKeyword {
                keyword,
                first,
                second,
            } => write!(
                f,
                "keyword '{keyword}' is listed under both '{first}' and '{second}'"
            ),
            Self::InvalidNgramRange { min, max } => {
                write!(f, "n-gram range {min}..={max} contains no lengths")
            }
            Self::ZeroLimit { setting } => {
                write!(f, "{setting} is 0, no highlights will be produced")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(ref path) = config.aspects.lexicon {
        if !path.exists() {
            warnings.push(ConfigWarning::LexiconMissing {
                path: path.display().to_string(),
            });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::LexiconNotFile {
                path: path.display().to_string(),
            });
        }
    }

    warnings.extend(validate_keywords(config));

    let h = &config.highlights;
    if h.ngram_min == 0 || h.ngram_min > h.ngram_max {
        warnings.push(ConfigWarning::InvalidNgramRange {
            min: h.ngram_min,
            max: h.ngram_max,
        });
    }
    if h.candidates == 0 {
        warnings.push(ConfigWarning::ZeroLimit {
            setting: "highlights.candidates",
        });
    }
    if h.limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit {
            setting: "highlights.limit",
        });
    }

    warnings
}

/// Checks the aspect dictionary for empty aspects and keywords owned twice.
///
/// Keywords are compared after tokenization, the same way the tagger matches them.
fn validate_keywords(config: &Config) -> Vec<ConfigWarning> {
    let keywords = &config.aspects.keywords;
    if keywords.is_empty() {
        return vec![ConfigWarning::NoAspects];
    }

    let mut warnings = Vec::new();
    let mut owner: HashMap<String, &str> = HashMap::new();

    for (aspect, list) in keywords {
        let mut usable = 0;
        for raw in list {
            let normalized = words(raw).join(" ");
            if normalized.is_empty() {
                continue;
            }
            usable += 1;
            match owner.get(&normalized) {
                Some(&first) if first != aspect => {
                    warnings.push(ConfigWarning::SharedKeyword {
                        keyword: normalized,
                        first: first.to_string(),
                        second: aspect.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    owner.insert(normalized, aspect);
                }
            }
        }
        if usable == 0 {
            warnings.push(ConfigWarning::EmptyAspect {
                aspect: aspect.clone(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, path::PathBuf};

    use super::*;
    use crate::test_support::Sandbox;

    fn keywords(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(a, ks)| (a.to_string(), ks.iter().map(|k| k.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_default_config_is_clean() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn test_lexicon_missing() {
        let mut config = Config::default();
        config.aspects.lexicon = Some(PathBuf::from("/nonexistent/lexicon-12345.csv"));
        let warnings = config.validate();
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ConfigWarning::LexiconMissing { .. }))
        );
    }

    #[test]
    fn test_lexicon_is_directory() {
        let sb = Sandbox::new();
        let mut config = Config::default();
        config.aspects.lexicon = Some(sb.mkdir("lexicons"));
        assert!(matches!(
            config.validate()[0],
            ConfigWarning::LexiconNotFile { .. }
        ));
    }

    #[test]
    fn test_lexicon_present() {
        let sb = Sandbox::new();
        let mut config = Config::default();
        config.aspects.lexicon = Some(sb.lexicon("lexicon.csv", &[("good", "positive")]));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_no_aspects() {
        let mut config = Config::default();
        config.aspects.keywords.clear();
        assert_eq!(config.validate(), vec![ConfigWarning::NoAspects]);
    }

    #[test]
    fn test_empty_aspect() {
        let mut config = Config::default();
        config.aspects.keywords = keywords(&[("drinks", &[]), ("food", &["menu"])]);
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::EmptyAspect {
                aspect: "drinks".into()
            }]
        );
    }

    #[test]
    fn test_shared_keyword_across_aspects() {
        let mut config = Config::default();
        config.aspects.keywords = keywords(&[("food", &["Bar Menu"]), ("drinks", &["bar menu"])]);
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::SharedKeyword {
                keyword: "bar menu".into(),
                first: "drinks".into(),
                second: "food".into(),
            }]
        );
    }

    #[test]
    fn test_repeated_keyword_within_aspect_is_fine() {
        let mut config = Config::default();
        config.aspects.keywords = keywords(&[("food", &["menu", "Menu"])]);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_invalid_ngram_range() {
        let mut config = Config::default();
        config.highlights.ngram_min = 4;
        config.highlights.ngram_max = 2;
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::InvalidNgramRange { min: 4, max: 2 }]
        );

        config.highlights.ngram_min = 0;
        assert!(!config.validate().is_empty());
    }

    #[test]
    fn test_zero_limits() {
        let mut config = Config::default();
        config.highlights.limit = 0;
        config.highlights.candidates = 0;
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::LexiconMissing {
            path: "/some/path".into(),
        };
        assert_eq!(warning.to_string(), "lexicon file does not exist: /some/path");

        let warning = ConfigWarning::SharedKeyword {
            keyword: "menu".into(),
            first: "drinks".into(),
            second: "food".into(),
        };
        assert_eq!(
            warning.to_string(),
            "keyword 'menu' is listed under both 'drinks' and 'food'"
        );
    }
}
