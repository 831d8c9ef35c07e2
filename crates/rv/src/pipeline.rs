//! Wiring of the text, aspect and phrase stages into one run.

use rv_aspect::{AspectAnalysis, AspectDictionary, AspectError, Lexicon, Tagger, analyze};
use rv_config::Config;
use rv_corpus::Corpus;
use rv_phrase::{BusinessHighlights, Highlight, HighlightParams, extract};
use rv_text::{Cleaner, Stopwords};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while building a pipeline from configuration.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The configured aspect dictionary is invalid.
    #[error("invalid aspect dictionary: {source}")]
    Dictionary {
        /// Underlying dictionary error.
        #[source]
        source: AspectError,
    },

    /// The configured lexicon could not be loaded.
    #[error("failed to load lexicon: {source}")]
    Lexicon {
        /// Underlying lexicon error.
        #[source]
        source: AspectError,
    },
}

/// The configured analysis stages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Stop-word removal for phrase extraction.
    cleaner: Cleaner,
    /// Keyword matcher and window cutter.
    tagger: Tagger,
    /// Word polarities for window scoring.
    lexicon: Lexicon,
    /// Highlight extraction parameters.
    highlights: HighlightParams,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(
            Cleaner::default(),
            Tagger::default(),
            Lexicon::builtin(),
            HighlightParams::default(),
        )
    }
}

impl Pipeline {
    /// Assembles a pipeline from its stages.
    pub fn new(
        cleaner: Cleaner,
        tagger: Tagger,
        lexicon: Lexicon,
        highlights: HighlightParams,
    ) -> Self {
        Self {
            cleaner,
            tagger,
            lexicon,
            highlights,
        }
    }

    /// Builds a pipeline from merged configuration.
    ///
    /// The lexicon file, when configured, is read here; a missing file is an error rather
    /// than a silent fallback to the bundled list.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let stopwords = Stopwords::with_extra(&config.text.extra_stopwords);
        let dictionary = AspectDictionary::new(&config.aspects.keywords)
            .map_err(|source| PipelineError::Dictionary { source })?;
        let lexicon = match config.aspects.lexicon {
            Some(ref path) => {
                Lexicon::from_path(path).map_err(|source| PipelineError::Lexicon { source })?
            }
            None => Lexicon::builtin(),
        };
        debug!(
            stopwords = stopwords.len(),
            aspects = dictionary.aspects().len(),
            lexicon = lexicon.len(),
            "built pipeline"
        );

        Ok(Self::new(
            Cleaner::new(stopwords),
            Tagger::new(dictionary, config.aspects.window),
            lexicon,
            config.highlights.params(),
        ))
    }

    /// Returns the cleaner.
    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    /// Returns the tagger.
    pub fn tagger(&self) -> &Tagger {
        &self.tagger
    }

    /// Returns the lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the highlight parameters.
    pub fn highlight_params(&self) -> &HighlightParams {
        &self.highlights
    }
}

/// A business and how many reviews it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessSummary {
    /// Business name.
    pub name: String,
    /// Number of reviews in the corpus.
    pub reviews: usize,
}

/// Results of one pipeline run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Businesses in first-seen order.
    pub businesses: Vec<BusinessSummary>,
    /// Context windows and per-(business, aspect) sentiment.
    pub aspects: AspectAnalysis,
    /// Selected phrases per business.
    pub highlights: Vec<BusinessHighlights>,
}

impl Analysis {
    /// Runs both analyses over the whole corpus.
    pub fn run(corpus: &Corpus, pipeline: &Pipeline) -> Self {
        let aspects = analyze(corpus.reviews(), &pipeline.tagger, &pipeline.lexicon);
        let tokens = pipeline.cleaner.clean_all(corpus.reviews());
        let highlights = extract(&tokens, &pipeline.highlights);

        let businesses = corpus
            .businesses()
            .iter()
            .map(|name| BusinessSummary {
                name: name.clone(),
                reviews: corpus
                    .reviews()
                    .iter()
                    .filter(|r| r.business == *name)
                    .count(),
            })
            .collect();

        info!(
            reviews = corpus.len(),
            tokens = tokens.len(),
            windows = aspects.windows.len(),
            "analysis complete"
        );

        Self {
            businesses,
            aspects,
            highlights,
        }
    }

    /// Keeps only the results for one business.
    ///
    /// Filtering happens after the run so TF-IDF still sees every business. `business`
    /// must be the exact name, as returned by `Corpus::resolve_business`.
    pub fn retain_business(&mut self, business: &str) {
        self.businesses.retain(|b| b.name == business);
        self.aspects.windows.retain(|w| w.window.business == business);
        self.aspects.sentiments.retain(|s| s.business == business);
        self.highlights.retain(|h| h.business == business);
    }

    /// Returns the highlights for a business, empty if it has none.
    pub fn highlights_for(&self, business: &str) -> &[Highlight] {
        self.highlights
            .iter()
            .find(|h| h.business == business)
            .map_or(&[], |h| h.highlights.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, fs};

    use rv_corpus::Review;

    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_reviews(vec![
            Review::new(
                "r1",
                "Test Cafe",
                "The staff slow rude. Shrimp grits, shrimp grits again.",
            ),
            Review::new("r2", "Husk", "Fried chicken was delicious, fried chicken!"),
            Review::new("r3", "Test Cafe", "Food was delicious but the bill was expensive"),
            Review::new("r4", "Husk", "Husk skillet cornbread and skillet cornbread"),
        ])
        .unwrap()
    }

    #[test]
    fn test_negative_service_context() {
        let analysis = Analysis::run(&corpus(), &Pipeline::default());
        let row = analysis.aspects.get("Test Cafe", "service").unwrap();
        assert!(row.net_sentiment < 0);
    }

    #[test]
    fn test_every_business_is_summarized() {
        let analysis = Analysis::run(&corpus(), &Pipeline::default());
        assert_eq!(
            analysis.businesses,
            vec![
                BusinessSummary {
                    name: "Test Cafe".into(),
                    reviews: 2
                },
                BusinessSummary {
                    name: "Husk".into(),
                    reviews: 2
                },
            ]
        );
    }

    #[test]
    fn test_highlights_respect_invariants() {
        let analysis = Analysis::run(&corpus(), &Pipeline::default());
        for business in &analysis.highlights {
            assert!(business.highlights.len() <= 3);
            let name_words: HashSet<String> = business
                .business
                .split_whitespace()
                .map(str::to_lowercase)
                .collect();
            let mut used = HashSet::new();
            for h in &business.highlights {
                for w in h.phrase.split_whitespace() {
                    assert!(!name_words.contains(w));
                    assert!(used.insert(w.to_string()));
                }
            }
        }
    }

    #[test]
    fn test_run_is_idempotent() {
        let corpus = corpus();
        let pipeline = Pipeline::default();
        let first = Analysis::run(&corpus, &pipeline);
        let second = Analysis::run(&corpus, &pipeline);
        assert_eq!(first.aspects.sentiments, second.aspects.sentiments);
        assert_eq!(first.highlights, second.highlights);
    }

    #[test]
    fn test_retain_business_filters_all_tables() {
        let mut analysis = Analysis::run(&corpus(), &Pipeline::default());
        analysis.retain_business("Husk");
        assert_eq!(analysis.businesses.len(), 1);
        assert!(analysis.aspects.sentiments.iter().all(|s| s.business == "Husk"));
        assert!(analysis.aspects.windows.iter().all(|w| w.window.business == "Husk"));
        assert!(analysis.highlights.iter().all(|h| h.business == "Husk"));
    }

    #[test]
    fn test_from_config_uses_custom_keywords() {
        let mut config = Config::default();
        config.aspects.keywords.clear();
        config
            .aspects
            .keywords
            .insert("bread".into(), vec!["cornbread".into()]);
        let pipeline = Pipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.tagger().dictionary().aspects(), ["bread"]);

        let analysis = Analysis::run(&corpus(), &pipeline);
        assert!(analysis.aspects.sentiments.iter().all(|s| s.aspect == "bread"));
    }

    #[test]
    fn test_from_config_rejects_shared_keyword() {
        let mut config = Config::default();
        config
            .aspects
            .keywords
            .insert("drinks".into(), vec!["menu".into()]);
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(PipelineError::Dictionary { .. })
        ));
    }

    #[test]
    fn test_from_config_reads_lexicon_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.csv");
        fs::write(&path, "word,sentiment\nrude,positive\n").unwrap();
        let mut config = Config::default();
        config.aspects.lexicon = Some(path);

        let pipeline = Pipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.lexicon().len(), 1);
        let analysis = Analysis::run(&corpus(), &pipeline);
        let row = analysis.aspects.get("Test Cafe", "service").unwrap();
        assert!(row.net_sentiment > 0);
    }

    #[test]
    fn test_from_config_missing_lexicon_is_error() {
        let mut config = Config::default();
        config.aspects.lexicon = Some("/nonexistent/lexicon-98765.csv".into());
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(PipelineError::Lexicon { .. })
        ));
    }
}
