//! Relevance scoring.
//!
//! ```text
//! raw   = title_matches × 0.6 + content_matches × 0.4
//!       + 0.3 if the lower-cased query is a substring of the title
//!       + 0.2 if it is a substring of the content
//! score = min(raw / 2.0, 1.0)
//! ```
//!
//! The divisor is a fixed constant, so scores only order results within a
//! single query. They are not calibrated across corpora.

use serde::Serialize;

use crate::matcher::Matcher;
use crate::tokenize::query_words;

pub const TITLE_WEIGHT: f64 = 0.6;
pub const CONTENT_WEIGHT: f64 = 0.4;
pub const TITLE_PHRASE_BONUS: f64 = 0.3;
pub const CONTENT_PHRASE_BONUS: f64 = 0.2;
pub const NORMALIZATION_DIVISOR: f64 = 2.0;

/// Per-field contributions behind a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub title_matches: usize,
    pub content_matches: usize,
    pub title_phrase: bool,
    pub content_phrase: bool,
    /// Weighted sum before normalization.
    pub raw: f64,
    /// Final score in `[0.0, 1.0]`.
    pub score: f64,
}

/// Scores documents against one query. Build once per search.
#[derive(Debug, Clone)]
pub struct Scorer {
    matcher: Matcher,
    phrase: String,
}

impl Scorer {
    pub fn new(query: &str) -> Self {
        Self {
            matcher: Matcher::new(&query_words(query)),
            phrase: query.to_lowercase(),
        }
    }

    pub fn score(&self, title: &str, content: &str) -> f64 {
        self.breakdown(title, content).score
    }

    pub fn breakdown(&self, title: &str, content: &str) -> ScoreBreakdown {
        let title_lower = title.to_lowercase();
        let content_lower = content.to_lowercase();

        let title_matches = self.matcher.count(title);
        let content_matches = self.matcher.count(content);
        let title_phrase = title_lower.contains(&self.phrase);
        let content_phrase = content_lower.contains(&self.phrase);

        let mut raw =
            title_matches as f64 * TITLE_WEIGHT + content_matches as f64 * CONTENT_WEIGHT;
        if title_phrase {
            raw += TITLE_PHRASE_BONUS;
        }
        if content_phrase {
            raw += CONTENT_PHRASE_BONUS;
        }

        ScoreBreakdown {
            title_matches,
            content_matches,
            title_phrase,
            content_phrase,
            raw,
            score: (raw / NORMALIZATION_DIVISOR).min(1.0),
        }
    }
}

/// Score a single title/content pair against `query`.
pub fn relevance_score(query: &str, title: &str, content: &str) -> f64 {
    Scorer::new(query).score(title, content)
}
