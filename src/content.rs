//! Educational content management.
//!
//! Create, list, get, update, and delete articles in the SQLite store.
//! Used by the `pura content` CLI commands; the HTTP server goes through
//! the same [`ContentStore`] trait.

use anyhow::{bail, Result};

use pura_search_core::models::{Category, Document, NewContent, UpdateContent};
use pura_search_core::store::ContentStore;

use crate::config::Config;
use crate::db;
use crate::migrate;
use crate::sqlite_store::SqliteStore;

/// Open the configured database as a [`SqliteStore`], ensuring the schema exists.
pub async fn open_store(config: &Config) -> Result<SqliteStore> {
    let pool = db::connect(config).await?;
    migrate::apply_schema(&pool).await?;
    Ok(SqliteStore::new(pool))
}

pub async fn run_add(
    config: &Config,
    title: String,
    category: Category,
    content: String,
) -> Result<()> {
    let input = NewContent {
        title,
        category,
        content,
    };
    input.validate()?;

    let store = open_store(config).await?;
    let doc = store.create_content(&input).await?;
    store.pool().close().await;

    println!("Created content {}: {}", doc.id, doc.title);
    Ok(())
}

pub async fn run_list(config: &Config, category: Option<Category>) -> Result<()> {
    let store = open_store(config).await?;
    let docs = store.list_content(category).await?;
    store.pool().close().await;

    if docs.is_empty() {
        println!("No content.");
        return Ok(());
    }

    for doc in &docs {
        println!(
            "{:>4}  {:<12}  {}  {}",
            doc.id,
            doc.category,
            doc.created_at.format("%Y-%m-%d"),
            doc.title
        );
    }
    println!("{} item(s)", docs.len());
    Ok(())
}

pub async fn run_get(config: &Config, id: i64) -> Result<()> {
    let store = open_store(config).await?;
    let doc = store.get_content(id).await?;
    store.pool().close().await;

    match doc {
        Some(doc) => {
            print_document(&doc);
            Ok(())
        }
        None => bail!("content not found: {}", id),
    }
}

pub async fn run_update(
    config: &Config,
    id: i64,
    title: Option<String>,
    category: Option<Category>,
    content: Option<String>,
) -> Result<()> {
    let input = UpdateContent {
        id,
        title,
        category,
        content,
    };
    input.validate()?;

    let store = open_store(config).await?;
    let updated = store.update_content(&input).await?;
    store.pool().close().await;

    match updated {
        Some(doc) => {
            println!("Updated content {}: {}", doc.id, doc.title);
            Ok(())
        }
        None => bail!("content not found: {}", id),
    }
}

pub async fn run_delete(config: &Config, id: i64) -> Result<()> {
    let store = open_store(config).await?;
    let deleted = store.delete_content(id).await?;
    store.pool().close().await;

    if !deleted {
        bail!("content not found: {}", id);
    }
    println!("Deleted content {}", id);
    Ok(())
}

fn print_document(doc: &Document) {
    println!("--- Content ---");
    println!("id: {}", doc.id);
    println!("title: {}", doc.title);
    println!("category: {}", doc.category);
    println!("created_at: {}", doc.created_at.to_rfc3339());
    println!("updated_at: {}", doc.updated_at.to_rfc3339());
    println!();
    println!("{}", doc.content);
}
