//! Word segmentation.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into lowercase words using Unicode (UAX#29) word boundaries.
///
/// Punctuation never forms a word. Tokens with no alphabetic character (`42`, `3.5`,
/// `10:30`) are dropped as well, so the output contains only words a reader would
/// recognise as such. Typographic apostrophes are folded to `'` so that `don’t` and
/// `don't` tokenize identically.
pub fn words(text: &str) -> Vec<String> {
    text.unicode_words()
        .filter(|w| w.chars().any(char::is_alphabetic))
        .map(|w| w.replace('\u{2019}', "'").to_lowercase())
        .collect()
}
