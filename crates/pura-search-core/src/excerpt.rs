//! Excerpt extraction around the best query match.
//!
//! The anchor is the first occurrence of the longest cleaned query word
//! found in the lower-cased content (ties go to the earlier query word).
//! When no word is found the full lower-cased query is tried, and failing
//! that the excerpt starts at the beginning of the content.
//!
//! The window starts `lead` characters before the anchor and spans at most
//! `max_length` characters. `"..."` marks each side that was cut, so the
//! output is never longer than `max_length + 6` characters.
//!
//! Positions are counted in characters, never bytes, so a window never
//! splits a code point.

use crate::tokenize::query_words;

/// Default excerpt window, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 200;
/// Default number of characters kept before the anchor.
pub const DEFAULT_LEAD: usize = 50;

const ELLIPSIS: &str = "...";

/// Lower-cased view of a text that remembers where each lower-cased
/// character came from. Lower-casing can change the character count
/// (`'İ'` becomes two characters), so offsets found in the folded text
/// are mapped back before slicing the original.
struct FoldedText {
    lower: String,
    origin: Vec<usize>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut lower = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (i, c) in text.chars().enumerate() {
            for lc in c.to_lowercase() {
                lower.push(lc);
                origin.push(i);
            }
        }
        Self { lower, origin }
    }

    /// Character index in the original text of the first occurrence of `needle`.
    fn find(&self, needle: &str) -> Option<usize> {
        let byte_idx = self.lower.find(needle)?;
        let char_idx = self.lower[..byte_idx].chars().count();
        Some(self.origin.get(char_idx).copied().unwrap_or(self.origin.len()))
    }
}

fn best_anchor(query: &str, folded: &FoldedText) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for word in query_words(query) {
        let len = word.chars().count();
        if let Some(idx) = folded.find(&word) {
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((idx, len));
            }
        }
    }
    best.map(|(idx, _)| idx)
        .or_else(|| folded.find(&query.to_lowercase()))
}

/// Build an excerpt of at most `max_length` characters (plus ellipses)
/// using the default lead of [`DEFAULT_LEAD`] characters.
pub fn create_excerpt(query: &str, content: &str, max_length: usize) -> String {
    create_excerpt_with_lead(query, content, max_length, DEFAULT_LEAD)
}

/// Like [`create_excerpt`] with an explicit lead before the anchor.
pub fn create_excerpt_with_lead(
    query: &str,
    content: &str,
    max_length: usize,
    lead: usize,
) -> String {
    if content.is_empty() {
        return String::new();
    }

    let folded = FoldedText::new(content);
    let anchor = best_anchor(query, &folded).unwrap_or(0);

    let chars: Vec<char> = content.chars().collect();
    let start = anchor.saturating_sub(lead).min(chars.len());
    let end = start.saturating_add(max_length).min(chars.len());

    let mut excerpt = String::with_capacity(max_length + 2 * ELLIPSIS.len());
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.extend(&chars[start..end]);
    if end < chars.len() {
        excerpt.push_str(ELLIPSIS);
    }

    excerpt.trim().to_string()
}
