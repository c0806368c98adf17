//! Query tokenization.
//!
//! A query is lower-cased, split on whitespace runs, and tokens of one
//! character or fewer are dropped. Each surviving token is then cleaned of
//! every non-word character (anything but letters, digits, underscore);
//! tokens that clean to nothing are dropped too.
//!
//! No stemming and no stopword removal.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w]").expect("NON_WORD regex is valid");
}

/// Whether `c` is a word character in the `\w` sense used by [`clean_word`].
pub fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    !NON_WORD.is_match(c.encode_utf8(&mut buf))
}

/// Strip every non-word character from `token`.
pub fn clean_word(token: &str) -> String {
    NON_WORD.replace_all(token, "").into_owned()
}

/// Lower-cased whitespace tokens longer than one character, before cleaning.
pub fn raw_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// The cleaned query words used for pre-filtering, matching, and excerpting.
///
/// Order follows the query; duplicates are kept.
pub fn query_words(query: &str) -> Vec<String> {
    raw_tokens(query)
        .iter()
        .map(|t| clean_word(t))
        .filter(|w| !w.is_empty())
        .collect()
}
