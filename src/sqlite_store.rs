//! SQLite-backed [`ContentStore`] implementation.
//!
//! Timestamps are stored as Unix milliseconds and categories as their
//! lowercase names.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use pura_search_core::models::{Category, Document, NewContent, UpdateContent};
use pura_search_core::store::ContentStore;

const COLUMNS: &str = "id, title, category, content, created_at, updated_at";

/// SQLite implementation of the [`ContentStore`] trait.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn ts_from_millis(ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| anyhow!("invalid timestamp: {}", ms))
}

fn row_to_document(row: &SqliteRow) -> Result<Document> {
    let category: String = row.try_get("category")?;
    Ok(Document {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        category: category
            .parse::<Category>()
            .with_context(|| format!("corrupt category in row: {}", category))?,
        content: row.try_get("content")?,
        created_at: ts_from_millis(row.try_get("created_at")?)?,
        updated_at: ts_from_millis(row.try_get("updated_at")?)?,
    })
}

#[async_trait]
impl ContentStore for SqliteStore {
    async fn list_content(&self, category: Option<Category>) -> Result<Vec<Document>> {
        let rows = match category {
            Some(c) => {
                sqlx::query(&format!(
                    "SELECT {} FROM educational_content WHERE category = ? ORDER BY created_at DESC, id DESC",
                    COLUMNS
                ))
                .bind(c.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {} FROM educational_content ORDER BY created_at DESC, id DESC",
                    COLUMNS
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(row_to_document).collect()
    }

    async fn get_content(&self, id: i64) -> Result<Option<Document>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM educational_content WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn create_content(&self, input: &NewContent) -> Result<Document> {
        let now = Utc::now().timestamp_millis();
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO educational_content (title, category, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&input.title)
        .bind(input.category.as_str())
        .bind(&input.content)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row_to_document(&row)
    }

    async fn update_content(&self, input: &UpdateContent) -> Result<Option<Document>> {
        let now = Utc::now().timestamp_millis();
        let row = sqlx::query(&format!(
            r#"
            UPDATE educational_content SET
                title = COALESCE(?, title),
                category = COALESCE(?, category),
                content = COALESCE(?, content),
                updated_at = ?
            WHERE id = ?
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(input.title.as_deref())
        .bind(input.category.map(|c| c.as_str()))
        .bind(input.content.as_deref())
        .bind(now)
        .bind(input.id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn delete_content(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM educational_content WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
