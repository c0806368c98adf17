//! Core data models for Pura Search.
//!
//! These types represent the educational articles stored by the content
//! layer and the request/response shapes of the smart search.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Topic an educational article is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    History,
    Culture,
    Traditions,
    Festivals,
    Architecture,
    Ceremonies,
    Philosophy,
    General,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::History,
        Category::Culture,
        Category::Traditions,
        Category::Festivals,
        Category::Architecture,
        Category::Ceremonies,
        Category::Philosophy,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::History => "history",
            Category::Culture => "culture",
            Category::Traditions => "traditions",
            Category::Festivals => "festivals",
            Category::Architecture => "architecture",
            Category::Ceremonies => "ceremonies",
            Category::Philosophy => "philosophy",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SearchError::InvalidCategory(s.to_string()))
    }
}

/// An educational article, as returned by a [`ContentStore`](crate::store::ContentStore).
///
/// The search engine treats documents as immutable snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new article.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContent {
    pub title: String,
    pub category: Category,
    pub content: String,
}

impl NewContent {
    /// Reject blank titles and bodies.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SearchError::InvalidContent("title is required".into()));
        }
        if self.content.trim().is_empty() {
            return Err(SearchError::InvalidContent("content is required".into()));
        }
        Ok(())
    }
}

/// Partial update of an existing article. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContent {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdateContent {
    /// Reject provided-but-blank titles and bodies.
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(SearchError::InvalidContent("title must not be empty".into()));
        }
        if matches!(&self.content, Some(c) if c.trim().is_empty()) {
            return Err(SearchError::InvalidContent(
                "content must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply the provided fields onto `doc`, bumping `updated_at`.
    pub fn apply(&self, doc: &mut Document, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            doc.title = title.clone();
        }
        if let Some(category) = self.category {
            doc.category = category;
        }
        if let Some(content) = &self.content {
            doc.content = content.clone();
        }
        doc.updated_at = now;
    }
}

/// A validated smart-search request.
///
/// Construction fails for empty or whitespace-only queries, so the
/// orchestrator never sees one.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    query: String,
    category: Option<Category>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, category: Option<Category>) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery("query is required".into()));
        }
        Ok(Self { query, category })
    }

    /// Build a query from raw request fields, parsing the category name.
    pub fn parse(query: &str, category: Option<&str>) -> Result<Self> {
        let category = category.map(Category::from_str).transpose()?;
        Self::new(query, category)
    }

    /// The query text exactly as supplied.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }
}

/// One ranked hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "content")]
    pub document: Document,
    /// Ranking heuristic in `[0.0, 1.0]`. Not a probability.
    pub relevance_score: f64,
    pub excerpt: String,
}

/// Ranked results for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: usize,
}
