//! Candidate filtering and diversity-aware selection.

use std::{cmp::Ordering, collections::HashSet};

use crate::{RankedPhrase, rank::by_score_desc};

/// Lowercase whitespace-separated words of a business name.
fn name_words(business: &str) -> HashSet<String> {
    business
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Drops candidates sharing any word with the business's own name.
///
/// Keeps "angel oak" out of Angel Oak's highlights. The comparison splits the name on
/// whitespace and ignores case.
pub fn exclude_name_words(candidates: Vec<RankedPhrase>, business: &str) -> Vec<RankedPhrase> {
    let banned = name_words(business);
    candidates
        .into_iter()
        .filter(|c| !c.ngram.words.iter().any(|w| banned.contains(w)))
        .collect()
}

/// Orders longer phrases first, then by score.
fn by_length_then_score(a: &RankedPhrase, b: &RankedPhrase) -> Ordering {
    b.ngram.len().cmp(&a.ngram.len()).then_with(|| by_score_desc(a, b))
}

/// Greedily picks up to `limit` word-disjoint phrases.
///
/// Candidates are visited longest first, then by TF-IDF. A candidate is accepted only if
/// none of its words appear in an already accepted phrase.
pub fn select_diverse(mut candidates: Vec<RankedPhrase>, limit: usize) -> Vec<RankedPhrase> {
    candidates.sort_by(by_length_then_score);

    let mut used: HashSet<String> = HashSet::new();
    let mut selected = Vec::new();

    for candidate in candidates {
        if selected.len() >= limit {
            break;
        }
        if candidate.ngram.words.iter().any(|w| used.contains(w)) {
            continue;
        }
        used.extend(candidate.ngram.words.iter().cloned());
        selected.push(candidate);
    }

    selected
}
