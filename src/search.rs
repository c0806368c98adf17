//! Application-level search entry points.
//!
//! The ranking algorithm lives in `pura-search-core::search` and operates
//! through the [`ContentStore`](pura_search_core::store::ContentStore)
//! trait. This wrapper handles config, database connection, request
//! validation, and CLI output formatting.

use anyhow::Result;

pub use pura_search_core::models::{SearchQuery, SearchResponse, SearchResult};
pub use pura_search_core::search::{smart_search, SearchParams};

use crate::config::Config;
use crate::content::open_store;

/// Core search function returning structured results.
///
/// Shared by `pura search` (CLI). Validation errors (blank query, unknown
/// category) are returned before the database is opened.
pub async fn search_content(
    config: &Config,
    query: &str,
    category: Option<&str>,
) -> Result<SearchResponse> {
    let query = SearchQuery::parse(query, category)?;
    let store = open_store(config).await?;
    let response = smart_search(&store, &query, &config.search.params()).await;
    store.pool().close().await;
    Ok(response?)
}

/// CLI entry point for `pura search`.
pub async fn run_search(
    config: &Config,
    query: &str,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let response = search_content(config, query, category.as_deref()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, r) in response.results.iter().enumerate() {
        println!(
            "{}. [{:.2}] {} ({}, id {})",
            i + 1,
            r.relevance_score,
            r.document.title,
            r.document.category,
            r.document.id
        );
        println!("    {}", r.excerpt);
        println!();
    }
    println!("{} result(s) for \"{}\"", response.total, response.query);

    Ok(())
}
