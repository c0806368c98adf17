//! In-memory [`ContentStore`] implementation, used by tests and embedders.
//!
//! Uses a `BTreeMap` behind `std::sync::RwLock` for thread safety. IDs are
//! assigned sequentially starting at 1 and are never reused.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;

use crate::models::{Category, Document, NewContent, UpdateContent};

use super::ContentStore;

struct Inner {
    docs: BTreeMap<i64, Document>,
    last_id: i64,
}

/// In-memory content store.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                docs: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Seed the store with pre-built documents, keeping their IDs and
    /// timestamps.
    pub fn with_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        let docs: BTreeMap<i64, Document> = docs.into_iter().map(|d| (d.id, d)).collect();
        let last_id = docs.keys().next_back().copied().unwrap_or(0);
        Self {
            inner: RwLock::new(Inner { docs, last_id }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| anyhow!("content store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| anyhow!("content store lock poisoned"))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn list_content(&self, category: Option<Category>) -> Result<Vec<Document>> {
        let inner = self.read()?;
        let mut docs: Vec<Document> = inner
            .docs
            .values()
            .filter(|d| category.map_or(true, |c| d.category == c))
            .cloned()
            .collect();
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(docs)
    }

    async fn get_content(&self, id: i64) -> Result<Option<Document>> {
        Ok(self.read()?.docs.get(&id).cloned())
    }

    async fn create_content(&self, input: &NewContent) -> Result<Document> {
        let mut inner = self.write()?;
        inner.last_id += 1;
        let now = Utc::now();
        let doc = Document {
            id: inner.last_id,
            title: input.title.clone(),
            category: input.category,
            content: input.content.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.docs.insert(doc.id, doc.clone());
        Ok(doc)
    }

    async fn update_content(&self, input: &UpdateContent) -> Result<Option<Document>> {
        let mut inner = self.write()?;
        let doc = match inner.docs.get_mut(&input.id) {
            Some(d) => d,
            None => return Ok(None),
        };
        input.apply(doc, Utc::now());
        Ok(Some(doc.clone()))
    }

    async fn delete_content(&self, id: i64) -> Result<bool> {
        Ok(self.write()?.docs.remove(&id).is_some())
    }
}
