//! The aspect dictionary: aspect name to keyword list.

use std::collections::HashMap;

use rv_text::words;

use crate::AspectError;

/// Built-in aspects and their keywords.
pub const DEFAULT_ASPECTS: &[(&str, &[&str])] = &[
    (
        "service",
        &[
            "service",
            "staff",
            "server",
            "servers",
            "waiter",
            "waitress",
            "waitstaff",
            "host",
            "hostess",
            "manager",
            "bartender",
        ],
    ),
    (
        "food",
        &[
            "food",
            "dish",
            "dishes",
            "meal",
            "menu",
            "taste",
            "flavor",
            "flavors",
            "portion",
            "portions",
            "appetizer",
            "entree",
            "dessert",
        ],
    ),
    (
        "price",
        &[
            "price", "prices", "priced", "pricey", "cost", "value", "bill", "money", "worth",
        ],
    ),
    (
        "environment",
        &[
            "atmosphere",
            "ambiance",
            "ambience",
            "decor",
            "music",
            "vibe",
            "patio",
            "seating",
            "environment",
            "view",
            "interior",
        ],
    ),
];

/// A keyword as a sequence of lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// Index of the owning aspect.
    pub aspect: usize,
    /// Lowercase words of the keyword, matched as a contiguous run.
    pub words: Vec<String>,
}

impl Keyword {
    /// Returns the keyword as written in output (words joined by spaces).
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Mapping from aspect name to keywords, with each keyword owned by exactly one aspect.
#[derive(Debug, Clone)]
pub struct AspectDictionary {
    /// Aspect names in definition order.
    aspects: Vec<String>,
    /// All keywords.
    keywords: Vec<Keyword>,
    /// First word of each keyword to the keywords starting with it.
    by_first_word: HashMap<String, Vec<usize>>,
}

impl Default for AspectDictionary {
    fn default() -> Self {
        let entries = DEFAULT_ASPECTS
            .iter()
            .map(|(aspect, keywords)| (*aspect, keywords.iter().copied()));
        Self::new(entries).expect("built-in aspect dictionary is valid")
    }
}

impl AspectDictionary {
    /// Builds a dictionary from `(aspect, keywords)` entries.
    ///
    /// Keywords are tokenized the same way as review text, so `"Wait Staff"` matches the
    /// word pair `wait staff`. A keyword repeated within one aspect is kept once; a keyword
    /// shared by two aspects is an error.
    pub fn new<A, K, S>(entries: impl IntoIterator<Item = (A, K)>) -> Result<Self, AspectError>
    where
        A: AsRef<str>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aspects: Vec<String> = Vec::new();
        let mut keywords: Vec<Keyword> = Vec::new();
        let mut owner: HashMap<Vec<String>, usize> = HashMap::new();

        for (aspect, list) in entries {
            let aspect = aspect.as_ref().to_string();
            let index = match aspects.iter().position(|a| *a == aspect) {
                Some(i) => i,
                None => {
                    aspects.push(aspect.clone());
                    aspects.len() - 1
                }
            };

            for raw in list {
                let kw_words = words(raw.as_ref());
                if kw_words.is_empty() {
                    return Err(AspectError::EmptyKeyword {
                        aspect,
                        keyword: raw.as_ref().to_string(),
                    });
                }
                match owner.get(&kw_words) {
                    Some(&existing) if existing == index => continue,
                    Some(&existing) => {
                        return Err(AspectError::DuplicateKeyword {
                            keyword: kw_words.join(" "),
                            first: aspects[existing].clone(),
                            second: aspect,
                        });
                    }
                    None => {}
                }
                owner.insert(kw_words.clone(), index);
                keywords.push(Keyword {
                    aspect: index,
                    words: kw_words,
                });
            }
        }

        let mut by_first_word: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, kw) in keywords.iter().enumerate() {
            by_first_word.entry(kw.words[0].clone()).or_default().push(i);
        }

        Ok(Self {
            aspects,
            keywords,
            by_first_word,
        })
    }

    /// Returns aspect names in definition order.
    pub fn aspects(&self) -> &[String] {
        &self.aspects
    }

    /// Returns the keywords of one aspect, or `None` if the aspect is unknown.
    pub fn keywords_for(&self, aspect: &str) -> Option<Vec<String>> {
        let index = self.aspects.iter().position(|a| a == aspect)?;
        Some(
            self.keywords
                .iter()
                .filter(|k| k.aspect == index)
                .map(Keyword::text)
                .collect(),
        )
    }

    /// Returns the aspect owning a keyword.
    pub fn aspect_of(&self, keyword: &str) -> Option<&str> {
        let target = words(keyword);
        self.keywords
            .iter()
            .find(|k| k.words == target)
            .map(|k| self.aspects[k.aspect].as_str())
    }

    /// Returns true if the text is a keyword of any aspect.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.aspect_of(keyword).is_some()
    }

    /// Returns the number of keywords across all aspects.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if the dictionary holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns the name of the aspect at `index`.
    pub(crate) fn aspect_name(&self, index: usize) -> &str {
        &self.aspects[index]
    }

    /// Returns every keyword that occurs in `tokens` starting at `start`.
    pub(crate) fn matches_at<'a>(
        &'a self,
        tokens: &'a [String],
        start: usize,
    ) -> impl Iterator<Item = &'a Keyword> + 'a {
        self.by_first_word
            .get(&tokens[start])
            .into_iter()
            .flatten()
            .map(|&i| &self.keywords[i])
            .filter(move |kw| tokens[start..].starts_with(&kw.words))
    }

    /// Returns the longest keyword that occurs in `tokens` starting at `start`.
    pub(crate) fn longest_match_at<'a>(&'a self, tokens: &'a [String], start: usize) -> Option<&'a Keyword> {
        self.matches_at(tokens, start).max_by_key(|kw| kw.words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_four_aspects() {
        let dict = AspectDictionary::default();
        assert_eq!(dict.aspects(), &["service", "food", "price", "environment"]);
        assert_eq!(dict.aspect_of("staff"), Some("service"));
        assert_eq!(dict.aspect_of("decor"), Some("environment"));
    }

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        let dict = AspectDictionary::new([("service", ["Wait Staff"])]).unwrap();
        assert_eq!(dict.aspect_of("wait staff"), Some("service"));
        assert_eq!(dict.keywords_for("service").unwrap(), vec!["wait staff"]);
    }

    #[test]
    fn test_shared_keyword_is_rejected() {
        let err = AspectDictionary::new([("food", vec!["menu"]), ("price", vec!["menu"])])
            .unwrap_err();
        match err {
            AspectError::DuplicateKeyword {
                keyword,
                first,
                second,
            } => {
                assert_eq!(keyword, "menu");
                assert_eq!(first, "food");
                assert_eq!(second, "price");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_keyword_within_aspect_kept_once() {
        let dict = AspectDictionary::new([("food", ["menu", "Menu"])]).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_empty_keyword_is_rejected() {
        let err = AspectDictionary::new([("food", ["..."])]).unwrap_err();
        assert!(matches!(err, AspectError::EmptyKeyword { .. }));
    }

    #[test]
    fn test_matches_multi_word_keywords() {
        let dict = AspectDictionary::new([("service", ["wait staff", "staff"])]).unwrap();
        let tokens = words("the wait staff was great");
        let found: Vec<String> = dict.matches_at(&tokens, 1).map(Keyword::text).collect();
        assert_eq!(found, vec!["wait staff"]);
        let found: Vec<String> = dict.matches_at(&tokens, 2).map(Keyword::text).collect();
        assert_eq!(found, vec!["staff"]);
        assert_eq!(dict.matches_at(&tokens, 0).count(), 0);
    }

    #[test]
    fn test_longest_match_wins() {
        let dict = AspectDictionary::new([("service", ["staff", "wait staff"])]).unwrap();
        let tokens = words("our wait staff");
        assert_eq!(
            dict.longest_match_at(&tokens, 1).map(Keyword::text),
            Some("wait staff".to_string())
        );
        assert!(dict.longest_match_at(&tokens, 0).is_none());
    }

    #[test]
    fn test_unknown_aspect_has_no_keywords() {
        let dict = AspectDictionary::default();
        assert!(dict.keywords_for("parking").is_none());
        assert!(!dict.is_keyword("parking"));
    }
}
