//! Rollup of window scores into per-business aspect sentiment.

use std::collections::BTreeMap;

use rv_corpus::Review;
use serde::Serialize;
use tracing::debug;

use crate::{Lexicon, ScoredWindow, SentimentLabel, Tagger};

/// Number of windows carrying each label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    /// Windows labelled positive.
    pub positive: u32,
    /// Windows labelled negative.
    pub negative: u32,
    /// Windows labelled neutral.
    pub neutral: u32,
}

impl LabelCounts {
    /// Counts one more window with the given label.
    fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Total windows counted.
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

/// Net sentiment for one (business, aspect) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectSentiment {
    /// Business name.
    pub business: String,
    /// Aspect name.
    pub aspect: String,
    /// Positive lexicon matches summed over all windows.
    pub positive: u32,
    /// Negative lexicon matches summed over all windows.
    pub negative: u32,
    /// `positive - negative`.
    pub net_sentiment: i64,
    /// Per-window label tally.
    pub windows: LabelCounts,
}

impl AspectSentiment {
    /// Returns the label implied by the sign of the net sentiment.
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_net(self.net_sentiment)
    }
}

/// Sums raw lexicon matches per (business, aspect).
///
/// Pairs without any window do not appear. Rows are ordered by business name and then
/// aspect name, so the result does not depend on the order windows arrive in.
pub fn aggregate(windows: &[ScoredWindow]) -> Vec<AspectSentiment> {
    let mut rollup: BTreeMap<(&str, &str), AspectSentiment> = BTreeMap::new();

    for scored in windows {
        let w = &scored.window;
        let row = rollup
            .entry((w.business.as_str(), w.aspect.as_str()))
            .or_insert_with(|| AspectSentiment {
                business: w.business.clone(),
                aspect: w.aspect.clone(),
                positive: 0,
                negative: 0,
                net_sentiment: 0,
                windows: LabelCounts::default(),
            });
        row.positive += scored.score.positive;
        row.negative += scored.score.negative;
        row.windows.record(scored.label);
    }

    rollup
        .into_values()
        .map(|mut row| {
            row.net_sentiment = i64::from(row.positive) - i64::from(row.negative);
            row
        })
        .collect()
}

/// Windows and aggregated sentiment for a set of reviews.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AspectAnalysis {
    /// Every scored window, in review order.
    pub windows: Vec<ScoredWindow>,
    /// One row per (business, aspect) with at least one window.
    pub sentiments: Vec<AspectSentiment>,
}

impl AspectAnalysis {
    /// Returns the sentiment rows for one business.
    pub fn for_business<'a>(
        &'a self,
        business: &'a str,
    ) -> impl Iterator<Item = &'a AspectSentiment> {
        self.sentiments
            .iter()
            .filter(move |s| s.business == business)
    }

    /// Looks up the row for a (business, aspect) pair.
    pub fn get(&self, business: &str, aspect: &str) -> Option<&AspectSentiment> {
        self.sentiments
            .iter()
            .find(|s| s.business == business && s.aspect == aspect)
    }
}

/// Tags, scores and aggregates a sequence of reviews.
pub fn analyze<'a, I>(reviews: I, tagger: &Tagger, lexicon: &Lexicon) -> AspectAnalysis
where
    I: IntoIterator<Item = &'a Review>,
{
    let windows: Vec<ScoredWindow> = tagger
        .windows_all(reviews)
        .into_iter()
        .map(|w| ScoredWindow::new(w, lexicon))
        .collect();
    let sentiments = aggregate(&windows);
    debug!(
        windows = windows.len(),
        rows = sentiments.len(),
        "aggregated aspect sentiment"
    );
    AspectAnalysis {
        windows,
        sentiments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AspectDictionary, Polarity};

    fn lexicon() -> Lexicon {
        Lexicon::from_entries([
            ("slow", Polarity::Negative),
            ("rude", Polarity::Negative),
            ("cold", Polarity::Negative),
            ("friendly", Polarity::Positive),
            ("delicious", Polarity::Positive),
            ("amazing", Polarity::Positive),
        ])
    }

    fn reviews() -> Vec<Review> {
        vec![
            Review::new("r1", "Test Cafe", "The staff slow rude and careless"),
            Review::new("r2", "Test Cafe", "Food was delicious, staff friendly"),
            Review::new("r3", "Husk", "Delicious food and amazing food"),
            Review::new("r4", "Test Cafe", "Food arrived cold"),
        ]
    }

    #[test]
    fn test_negative_context_gives_negative_net() {
        let analysis = analyze(&reviews()[..1], &Tagger::default(), &lexicon());
        let row = analysis.get("Test Cafe", "service").unwrap();
        assert!(row.net_sentiment < 0);
        assert_eq!(row.negative, 2);
        assert_eq!(row.label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_sums_raw_counts_across_windows() {
        let analysis = analyze(&reviews(), &Tagger::default(), &lexicon());
        let service = analysis.get("Test Cafe", "service").unwrap();
        // r1: slow, rude; r2: "food was delicious staff friendly" -> delicious, friendly
        assert_eq!(service.positive, 2);
        assert_eq!(service.negative, 2);
        assert_eq!(service.net_sentiment, 0);
        assert_eq!(service.windows.negative, 1);
        assert_eq!(service.windows.positive, 1);
        assert_eq!(service.label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_absent_pairs_are_not_emitted() {
        let analysis = analyze(&reviews(), &Tagger::default(), &lexicon());
        assert!(analysis.get("Husk", "service").is_none());
        assert!(analysis.get("Husk", "price").is_none());
        assert!(analysis.get("Husk", "food").is_some());
    }

    #[test]
    fn test_result_is_independent_of_review_order() {
        let forward = analyze(&reviews(), &Tagger::default(), &lexicon());
        let mut shuffled = reviews();
        shuffled.reverse();
        shuffled.swap(0, 2);
        let backward = analyze(&shuffled, &Tagger::default(), &lexicon());
        assert_eq!(forward.sentiments, backward.sentiments);
    }

    #[test]
    fn test_window_keywords_come_from_dictionary() {
        let tagger = Tagger::default();
        let analysis = analyze(&reviews(), &tagger, &lexicon());
        assert!(!analysis.windows.is_empty());
        for scored in &analysis.windows {
            assert!(tagger.dictionary().is_keyword(&scored.window.keyword));
        }
    }

    #[test]
    fn test_rows_are_sorted_by_business_then_aspect() {
        let analysis = analyze(&reviews(), &Tagger::default(), &lexicon());
        let keys: Vec<(&str, &str)> = analysis
            .sentiments
            .iter()
            .map(|s| (s.business.as_str(), s.aspect.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Husk", "food"),
                ("Test Cafe", "food"),
                ("Test Cafe", "service"),
            ]
        );
    }

    #[test]
    fn test_custom_dictionary_is_honoured() {
        let dict = AspectDictionary::new([("drinks", ["cocktail", "wine"])]).unwrap();
        let tagger = Tagger::new(dict, 3);
        let reviews = vec![Review::new("r1", "Bar", "The wine list was amazing")];
        let analysis = analyze(&reviews, &tagger, &lexicon());
        assert_eq!(analysis.sentiments.len(), 1);
        assert_eq!(analysis.sentiments[0].aspect, "drinks");
        assert_eq!(analysis.sentiments[0].net_sentiment, 1);
    }

    #[test]
    fn test_overlapping_keywords_count_once() {
        let dict = AspectDictionary::new([("service", ["wait staff", "staff"])]).unwrap();
        let tagger = Tagger::new(dict, 3);
        let reviews = vec![Review::new("r1", "Test Cafe", "our wait staff was rude")];
        let analysis = analyze(&reviews, &tagger, &lexicon());
        assert_eq!(analysis.windows.len(), 1);
        let row = analysis.get("Test Cafe", "service").unwrap();
        assert_eq!(row.negative, 1);
        assert_eq!(row.net_sentiment, -1);
        assert_eq!(row.windows.negative, 1);
    }

    #[test]
    fn test_empty_input_gives_empty_analysis() {
        let analysis = analyze(&Vec::<Review>::new(), &Tagger::default(), &lexicon());
        assert!(analysis.windows.is_empty());
        assert!(analysis.sentiments.is_empty());
    }
}
