//! Keyword-in-context window extraction.

use rv_corpus::Review;
use rv_text::words;
use serde::Serialize;

use crate::AspectDictionary;

/// Default number of words kept on each side of a keyword.
pub const DEFAULT_RADIUS: usize = 3;

/// One keyword occurrence with its surrounding words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextWindow {
    /// Business the review belongs to.
    pub business: String,
    /// Review the occurrence was found in.
    pub review_id: String,
    /// Aspect owning the keyword.
    pub aspect: String,
    /// The matched keyword.
    pub keyword: String,
    /// Up to `radius` words before the keyword.
    pub before: Vec<String>,
    /// Up to `radius` words after the keyword.
    pub after: Vec<String>,
}

impl ContextWindow {
    /// Returns the window as text: preceding words, keyword, following words.
    pub fn snippet(&self) -> String {
        let mut parts: Vec<&str> = self.before.iter().map(String::as_str).collect();
        parts.push(&self.keyword);
        parts.extend(self.after.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// Finds aspect keywords in reviews and cuts context windows around them.
#[derive(Debug, Clone)]
pub struct Tagger {
    /// Keywords to look for.
    dictionary: AspectDictionary,
    /// Words kept on each side of a match.
    radius: usize,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(AspectDictionary::default(), DEFAULT_RADIUS)
    }
}

impl Tagger {
    /// Creates a tagger with the given dictionary and window radius.
    pub fn new(dictionary: AspectDictionary, radius: usize) -> Self {
        Self { dictionary, radius }
    }

    /// Returns the dictionary in use.
    pub fn dictionary(&self) -> &AspectDictionary {
        &self.dictionary
    }

    /// Returns the window radius.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Extracts one window per keyword occurrence in a review.
    ///
    /// Matching runs over every word of the review, stop words included, so the windows
    /// contain the real neighbouring words. Windows near the start or end of a review are
    /// truncated rather than dropped. Where keywords overlap, the longest one starting at
    /// a position wins and scanning resumes after it, so each word belongs to at most one
    /// keyword.
    pub fn windows(&self, review: &Review) -> Vec<ContextWindow> {
        let tokens = words(&review.text);
        let mut windows = Vec::new();

        let mut start = 0;
        while start < tokens.len() {
            let Some(keyword) = self.dictionary.longest_match_at(&tokens, start) else {
                start += 1;
                continue;
            };
            let end = start + keyword.words.len();
            let before_start = start.saturating_sub(self.radius);
            let after_end = (end + self.radius).min(tokens.len());
            windows.push(ContextWindow {
                business: review.business.clone(),
                review_id: review.review_id.clone(),
                aspect: self.dictionary.aspect_name(keyword.aspect).to_string(),
                keyword: keyword.text(),
                before: tokens[before_start..start].to_vec(),
                after: tokens[end..after_end].to_vec(),
            });
            start = end;
        }

        windows
    }

    /// Extracts windows from a sequence of reviews, in review order.
    pub fn windows_all<'a, I>(&self, reviews: I) -> Vec<ContextWindow>
    where
        I: IntoIterator<Item = &'a Review>,
    {
        reviews.into_iter().flat_map(|r| self.windows(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(text: &str) -> Review {
        Review::new("r1", "Test Cafe", text)
    }

    #[test]
    fn test_window_has_radius_words_each_side() {
        let tagger = Tagger::default();
        let windows = tagger.windows(&review("honestly the staff was slow and rude tonight sadly"));
        assert_eq!(windows.len(), 1);
        let w = &windows[0];
        assert_eq!(w.aspect, "service");
        assert_eq!(w.keyword, "staff");
        assert_eq!(w.before, vec!["honestly", "the"]);
        assert_eq!(w.after, vec!["was", "slow", "and"]);
        assert_eq!(w.snippet(), "honestly the staff was slow and");
    }

    #[test]
    fn test_window_truncated_at_edges() {
        let tagger = Tagger::default();
        let windows = tagger.windows(&review("Service!"));
        assert_eq!(windows.len(), 1);
        assert!(windows[0].before.is_empty());
        assert!(windows[0].after.is_empty());
        assert_eq!(windows[0].snippet(), "service");
    }

    #[test]
    fn test_every_occurrence_yields_a_window() {
        let tagger = Tagger::default();
        let windows = tagger.windows(&review("Food was good. The food was cold. Great decor."));
        let keywords: Vec<&str> = windows.iter().map(|w| w.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["food", "food", "decor"]);
        assert_eq!(windows[2].aspect, "environment");
    }

    #[test]
    fn test_context_sees_stopwords() {
        let tagger = Tagger::new(AspectDictionary::new([("food", ["menu"])]).unwrap(), 2);
        let windows = tagger.windows(&review("it is the menu that is"));
        assert_eq!(windows[0].before, vec!["is", "the"]);
        assert_eq!(windows[0].after, vec!["that", "is"]);
    }

    #[test]
    fn test_multi_word_keyword_window() {
        let dict = AspectDictionary::new([("service", ["wait staff"])]).unwrap();
        let tagger = Tagger::new(dict, 1);
        let windows = tagger.windows(&review("our wait staff rocked"));
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].snippet(), "our wait staff rocked");
    }

    #[test]
    fn test_overlapping_keywords_yield_one_window() {
        let dict = AspectDictionary::new([("service", ["wait staff", "staff"])]).unwrap();
        let tagger = Tagger::new(dict, 3);
        let windows = tagger.windows(&review("our wait staff was rude"));
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].keyword, "wait staff");
        assert_eq!(windows[0].after, vec!["was", "rude"]);

        // a lone "staff" later on is still its own mention
        let windows = tagger.windows(&review("wait staff and bar staff"));
        let keywords: Vec<&str> = windows.iter().map(|w| w.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["wait staff", "staff"]);
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        let tagger = Tagger::default();
        assert!(tagger.windows(&review("we were overstaffed")).is_empty());
    }

    #[test]
    fn test_windows_all_keeps_review_order() {
        let tagger = Tagger::default();
        let reviews = vec![
            Review::new("a", "X", "nice decor"),
            Review::new("b", "Y", "good food"),
        ];
        let windows = tagger.windows_all(&reviews);
        let ids: Vec<&str> = windows.iter().map(|w| w.review_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
