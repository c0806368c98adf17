//! Whole-word occurrence counting.
//!
//! Matching is case-insensitive and respects `\w` word boundaries: a hit
//! counts only when the characters on either side are not word characters.
//! Words shorter than two characters after cleaning are skipped and
//! contribute zero matches.
//!
//! Query words are literals (see [`query_words`](crate::tokenize::query_words)),
//! so counting is a plain substring scan with a boundary check. Nothing is
//! compiled per query, and no query can fail to build a matcher.

use crate::tokenize::is_word_char;

/// Minimum length, in characters, for a word to be counted.
pub const MIN_WORD_LEN: usize = 2;

/// Whole-word matcher for a set of cleaned query words.
#[derive(Debug, Clone)]
pub struct Matcher {
    words: Vec<String>,
}

impl Matcher {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let words = words
            .iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| w.chars().count() >= MIN_WORD_LEN)
            .collect();
        Self { words }
    }

    /// Sum of non-overlapping whole-word occurrences of every word in `text`.
    pub fn count(&self, text: &str) -> usize {
        let folded = text.to_lowercase();
        self.words
            .iter()
            .map(|w| count_whole_word(&folded, w))
            .sum()
    }

    /// Number of words that will be counted.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Convenience wrapper: build a matcher for `words` and count them in `text`.
pub fn count_matches<S: AsRef<str>>(text: &str, words: &[S]) -> usize {
    Matcher::new(words).count(text)
}

// `word` consists of word characters only, so a rejected candidate can never
// hide an overlapping accepted one: any later overlapping start would be
// preceded by a word character.
fn count_whole_word(text: &str, word: &str) -> usize {
    text.match_indices(word)
        .filter(|&(start, hit)| {
            let before = text[..start].chars().next_back();
            let after = text[start + hit.len()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_whole_words_only() {
        let m = Matcher::new(&["temple"]);
        assert_eq!(m.count("temple"), 1);
        assert_eq!(m.count("Hindu temples are sacred"), 0);
        assert_eq!(m.count("a temple, another temple."), 2);
        assert_eq!(m.count("subtemple temple_x (temple)"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let m = Matcher::new(&["diwali"]);
        assert_eq!(m.count("Diwali Festival Celebrations"), 1);
        assert_eq!(m.count("DIWALI diwali DiWaLi"), 3);
    }

    #[test]
    fn test_sums_across_words() {
        let m = Matcher::new(&["yoga", "meditation"]);
        assert_eq!(
            m.count("Yoga combines postures, breathing and meditation. The word yoga means union."),
            3
        );
    }

    #[test]
    fn test_duplicate_words_count_twice() {
        assert_eq!(count_matches("yoga", &["yoga", "yoga"]), 2);
    }

    #[test]
    fn test_skips_short_words() {
        let m = Matcher::new(&["a", "i", "of"]);
        assert_eq!(m.len(), 1);
        assert_eq!(m.count("a festival of lights, i think"), 1);
    }

    #[test]
    fn test_repeated_letters_respect_boundaries() {
        let m = Matcher::new(&["aa"]);
        assert_eq!(m.count("aaa"), 0);
        assert_eq!(m.count("aa aa"), 2);
        assert_eq!(m.count("aa-aa"), 2);
    }

    #[test]
    fn test_unicode_word_characters() {
        let m = Matcher::new(&["pura"]);
        assert_eq!(m.count("purañ pura"), 1);
        assert_eq!(m.count("çpura"), 0);
    }

    #[test]
    fn test_very_long_word() {
        let word = "k".repeat(100_000);
        let m = Matcher::new(&[word.as_str()]);
        assert_eq!(m.count(&word), 1);
        assert_eq!(m.count(&format!("{} {}", word, word.to_uppercase())), 2);
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        let m = Matcher::new(&none);
        assert!(m.is_empty());
        assert_eq!(m.count("anything at all"), 0);
        assert_eq!(count_matches("", &["pura"]), 0);
    }
}
