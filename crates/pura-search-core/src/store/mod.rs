//! Storage abstraction for educational content.
//!
//! The [`ContentStore`] trait is the corpus provider for the search engine
//! and the persistence seam for the content-management commands, enabling
//! pluggable backends (SQLite, in-memory).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Category, Document, NewContent, UpdateContent};

/// Abstract storage backend for educational articles.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`list_content`](ContentStore::list_content) | All articles, optionally one category, newest first |
/// | [`get_content`](ContentStore::get_content) | One article by ID |
/// | [`create_content`](ContentStore::create_content) | Insert a new article |
/// | [`update_content`](ContentStore::update_content) | Partially update an article |
/// | [`delete_content`](ContentStore::delete_content) | Remove an article |
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Return every article, or only those in `category` when given.
    ///
    /// Ordered by `created_at` descending, then `id` descending. The full
    /// set is materialized; there is no pagination.
    async fn list_content(&self, category: Option<Category>) -> Result<Vec<Document>>;

    /// Retrieve an article by ID.
    async fn get_content(&self, id: i64) -> Result<Option<Document>>;

    /// Insert an article, stamping `created_at` and `updated_at` with now.
    async fn create_content(&self, input: &NewContent) -> Result<Document>;

    /// Apply a partial update. Returns `None` when `input.id` does not exist.
    async fn update_content(&self, input: &UpdateContent) -> Result<Option<Document>>;

    /// Delete an article. Returns whether a row was removed.
    async fn delete_content(&self, id: i64) -> Result<bool>;
}
