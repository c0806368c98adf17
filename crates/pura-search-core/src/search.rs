//! Smart search: keyword relevance ranking over educational content.
//!
//! The orchestrator operates entirely through the [`ContentStore`] trait.
//! The only suspension point is corpus retrieval; everything after it is
//! pure computation over the returned snapshot.
//!
//! # Algorithm
//!
//! 1. Tokenize the query into cleaned words (see [`tokenize`](crate::tokenize)).
//! 2. Fetch the corpus, filtered by category when one is given.
//! 3. Pre-filter: keep a document when the lower-cased query, or any
//!    cleaned word of two or more characters, is a plain substring of its
//!    title or content.
//! 4. Score ([`Scorer`]) and excerpt ([`create_excerpt_with_lead`]) each survivor.
//! 5. Stable sort by score, descending. Ties keep corpus order.
//!
//! The pre-filter is substring-based while the scorer counts whole words,
//! so a document can surface through a match inside a longer word and
//! still receive only phrase-bonus credit (or zero).

use tracing::debug;

use crate::error::{Result, SearchError};
use crate::excerpt::{create_excerpt_with_lead, DEFAULT_LEAD, DEFAULT_MAX_LENGTH};
use crate::matcher::MIN_WORD_LEN;
use crate::models::{Document, SearchQuery, SearchResponse, SearchResult};
use crate::score::Scorer;
use crate::store::ContentStore;
use crate::tokenize::query_words;

/// Excerpt tuning, decoupled from application config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum excerpt length in characters, not counting ellipses.
    pub excerpt_length: usize,
    /// Characters kept before the excerpt anchor.
    pub excerpt_lead: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_MAX_LENGTH,
            excerpt_lead: DEFAULT_LEAD,
        }
    }
}

/// Run a smart search against a [`ContentStore`] backend.
///
/// This is the entry point all frontends (CLI, HTTP) delegate to. Store
/// failures are returned as [`SearchError::Retrieval`], never as an empty
/// response.
pub async fn smart_search<S: ContentStore + ?Sized>(
    store: &S,
    query: &SearchQuery,
    params: &SearchParams,
) -> Result<SearchResponse> {
    let corpus = store
        .list_content(query.category())
        .await
        .map_err(SearchError::Retrieval)?;

    let response = rank(query, &corpus, params);

    debug!(
        query = query.query(),
        category = query.category().map(|c| c.as_str()),
        candidates = corpus.len(),
        results = response.total,
        "smart search complete"
    );

    Ok(response)
}

/// Filter, score, excerpt, and sort an already-loaded corpus.
pub fn rank(
    query: &SearchQuery,
    corpus: &[Document],
    params: &SearchParams,
) -> SearchResponse {
    let words: Vec<String> = query_words(query.query())
        .into_iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .collect();
    let phrase = query.query().to_lowercase();
    let scorer = Scorer::new(query.query());

    let mut results: Vec<SearchResult> = corpus
        .iter()
        .filter(|doc| query.category().map_or(true, |c| doc.category == c))
        .filter(|doc| passes_prefilter(&phrase, &words, doc))
        .map(|doc| SearchResult {
            relevance_score: scorer.score(&doc.title, &doc.content),
            excerpt: create_excerpt_with_lead(
                query.query(),
                &doc.content,
                params.excerpt_length,
                params.excerpt_lead,
            ),
            document: doc.clone(),
        })
        .collect();

    results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

    SearchResponse {
        query: query.query().to_string(),
        total: results.len(),
        results,
    }
}

/// Coarse substring check on title and content (case-insensitive).
fn passes_prefilter(phrase: &str, words: &[String], doc: &Document) -> bool {
    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();
    let contains = |needle: &str| title.contains(needle) || content.contains(needle);
    contains(phrase) || words.iter().any(|w| contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::store::memory::InMemoryStore;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use crate::models::{NewContent, UpdateContent};

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn doc(id: i64, title: &str, category: Category, content: &str) -> Document {
        Document {
            id,
            title: title.to_string(),
            category,
            content: content.to_string(),
            created_at: ts(1_700_000_000 + id),
            updated_at: ts(1_700_000_000 + id),
        }
    }

    fn corpus() -> Vec<Document> {
        vec![
            doc(
                1,
                "Hindu Temple Architecture",
                Category::Architecture,
                "Hindu temples are sacred structures designed according to ancient architectural principles called Vastu Shastra. These magnificent buildings feature intricate carvings, towering spires called shikhara, and sacred spaces for worship and meditation.",
            ),
            doc(
                2,
                "Diwali Festival Celebrations",
                Category::Festivals,
                "Diwali, the festival of lights, is one of the most important Hindu celebrations. Families light oil lamps called diyas, exchange sweets, and perform prayers to goddess Lakshmi for prosperity and happiness.",
            ),
            doc(
                3,
                "Yoga and Meditation Philosophy",
                Category::Philosophy,
                "Yoga is an ancient practice that combines physical postures, breathing techniques, and meditation. The word yoga means union, representing the connection between mind, body, and spirit in Hindu philosophy.",
            ),
            doc(
                4,
                "Traditional Dance Forms",
                Category::Culture,
                "Classical Indian dance forms like Bharatanatyam, Kathak, and Odissi are deeply rooted in Hindu traditions. These dances tell stories from ancient epics through graceful movements and expressions.",
            ),
        ]
    }

    fn run(q: &str, category: Option<Category>) -> SearchResponse {
        let query = SearchQuery::new(q, category).unwrap();
        rank(&query, &corpus(), &SearchParams::default())
    }

    #[test]
    fn test_title_phrase_query() {
        let resp = run("Temple Architecture", None);
        assert_eq!(resp.query, "Temple Architecture");
        assert_eq!(resp.total, 1);
        assert_eq!(resp.results[0].document.title, "Hindu Temple Architecture");
        assert!(resp.results[0].relevance_score > 0.0);
        assert!(resp.results[0].excerpt.contains("Hindu temples"));
    }

    #[test]
    fn test_content_only_match_across_docs() {
        let resp = run("meditation", None);
        assert_eq!(resp.total, 2);
        assert!(resp.results.iter().any(|r| r.document.title.contains("Yoga")));
        // "Meditation" is also in the yoga title, so it ranks first.
        assert_eq!(resp.results[0].document.id, 3);
    }

    #[test]
    fn test_category_filter() {
        let resp = run("ancient", Some(Category::Philosophy));
        assert_eq!(resp.total, 1);
        assert_eq!(resp.results[0].document.category, Category::Philosophy);
        assert_eq!(resp.results[0].document.title, "Yoga and Meditation Philosophy");

        let unfiltered = run("ancient", None);
        assert_eq!(unfiltered.total, 3);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let resp = run("nonexistent topic", None);
        assert_eq!(resp.query, "nonexistent topic");
        assert_eq!(resp.total, 0);
        assert!(resp.results.is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let resp = run("DIWALI", None);
        assert_eq!(resp.total, 1);
        assert_eq!(resp.results[0].document.title, "Diwali Festival Celebrations");
        assert!(resp.results[0].relevance_score > 0.0);
    }

    #[test]
    fn test_sorted_by_relevance() {
        let resp = run("Hindu", None);
        assert_eq!(resp.total, 4);
        for pair in resp.results.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
        let temple = resp.results.iter().find(|r| r.document.id == 1).unwrap();
        let dance = resp.results.iter().find(|r| r.document.id == 4).unwrap();
        assert!(temple.relevance_score > dance.relevance_score);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        // Diwali, Yoga, and Dance all mention "hindu" once in the body only.
        let resp = run("Hindu", None);
        let tied: Vec<i64> = resp.results[1..].iter().map(|r| r.document.id).collect();
        assert_eq!(tied, vec![2, 3, 4]);
    }

    #[test]
    fn test_excerpt_around_phrase() {
        let resp = run("Vastu Shastra", None);
        assert_eq!(resp.total, 1);
        assert!(resp.results[0].excerpt.contains("Vastu Shastra"));
        assert!(resp.results[0].excerpt.chars().count() <= 206);
    }

    #[test]
    fn test_multi_word_any_word_prefilter() {
        let resp = run("festival lights", None);
        assert_eq!(resp.total, 1);
        assert_eq!(resp.results[0].document.title, "Diwali Festival Celebrations");
    }

    #[test]
    fn test_special_characters() {
        let resp = run("mind, body", None);
        assert_eq!(resp.query, "mind, body");
        assert_eq!(resp.total, 1);
        assert_eq!(resp.results[0].document.id, 3);
    }

    #[test]
    fn test_substring_prefilter_can_surface_zero_word_matches() {
        // "architect" only appears inside longer words.
        let resp = run("architect", None);
        assert_eq!(resp.total, 1);
        let hit = &resp.results[0].document;
        let b = Scorer::new("architect").breakdown(&hit.title, &hit.content);
        assert_eq!(b.title_matches + b.content_matches, 0);
        assert!((resp.results[0].relevance_score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_short_cleaned_words_do_not_prefilter() {
        // "a," cleans to "a", which is too short to count as a query word.
        let docs = vec![doc(1, "Bali Temple", Category::General, "A temple in Bali.")];
        let query = SearchQuery::new("a, zzzz", None).unwrap();
        let resp = rank(&query, &docs, &SearchParams::default());
        assert_eq!(resp.total, 0);
    }

    #[test]
    fn test_very_long_query_word() {
        let word = "k".repeat(100_000);
        let docs = vec![doc(1, "Kecak", Category::Culture, &word)];
        let query = SearchQuery::new(word.clone(), None).unwrap();
        let resp = rank(&query, &docs, &SearchParams::default());
        assert_eq!(resp.total, 1);
        assert!((resp.results[0].relevance_score - 0.3).abs() < 1e-9);
        assert_eq!(resp.results[0].excerpt.chars().count(), 203);
    }

    #[test]
    fn test_idempotent() {
        let a = run("sacred ancient", None);
        let b = run("sacred ancient", None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invariants_hold() {
        for q in ["hindu", "a", "the", "yoga meditation", "lights!", "zzz"] {
            for category in [None, Some(Category::Festivals), Some(Category::Culture)] {
                let resp = run(q, category);
                assert_eq!(resp.results.len(), resp.total);
                for r in &resp.results {
                    assert!((0.0..=1.0).contains(&r.relevance_score));
                    assert!(r.excerpt.chars().count() <= DEFAULT_MAX_LENGTH + 6);
                    if let Some(c) = category {
                        assert_eq!(r.document.category, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_content_document() {
        let docs = vec![doc(1, "Nyepi", Category::Festivals, "")];
        let query = SearchQuery::new("nyepi", None).unwrap();
        let resp = rank(&query, &docs, &SearchParams::default());
        assert_eq!(resp.total, 1);
        assert_eq!(resp.results[0].excerpt, "");
    }

    #[test]
    fn test_custom_excerpt_params() {
        let query = SearchQuery::new("meditation", None).unwrap();
        let params = SearchParams {
            excerpt_length: 30,
            excerpt_lead: 0,
        };
        let resp = rank(&query, &corpus(), &params);
        for r in &resp.results {
            assert!(r.excerpt.starts_with("...meditation"), "{}", r.excerpt);
            assert!(r.excerpt.chars().count() <= 36);
        }
    }

    #[tokio::test]
    async fn test_smart_search_through_store() {
        let store = InMemoryStore::with_documents(corpus());
        let query = SearchQuery::new("ancient", Some(Category::Culture)).unwrap();
        let resp = smart_search(&store, &query, &SearchParams::default())
            .await
            .unwrap();
        assert_eq!(resp.total, 1);
        assert_eq!(resp.results[0].document.id, 4);
    }

    #[tokio::test]
    async fn test_smart_search_empty_store() {
        let store = InMemoryStore::new();
        let query = SearchQuery::new("anything", None).unwrap();
        let resp = smart_search(&store, &query, &SearchParams::default())
            .await
            .unwrap();
        assert_eq!(resp.query, "anything");
        assert_eq!(resp.total, 0);
    }

    struct UnavailableStore;

    #[async_trait]
    impl ContentStore for UnavailableStore {
        async fn list_content(&self, _category: Option<Category>) -> anyhow::Result<Vec<Document>> {
            Err(anyhow!("storage unavailable"))
        }
        async fn get_content(&self, _id: i64) -> anyhow::Result<Option<Document>> {
            Err(anyhow!("storage unavailable"))
        }
        async fn create_content(&self, _input: &NewContent) -> anyhow::Result<Document> {
            Err(anyhow!("storage unavailable"))
        }
        async fn update_content(
            &self,
            _input: &UpdateContent,
        ) -> anyhow::Result<Option<Document>> {
            Err(anyhow!("storage unavailable"))
        }
        async fn delete_content(&self, _id: i64) -> anyhow::Result<bool> {
            Err(anyhow!("storage unavailable"))
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_retrieval_error() {
        let query = SearchQuery::new("pura", None).unwrap();
        let err = smart_search(&UnavailableStore, &query, &SearchParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Retrieval(_)));
        assert!(err.to_string().contains("storage unavailable"));
    }
}
