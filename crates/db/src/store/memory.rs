use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use gazette_core::article::validate_article;
use gazette_core::types::DbId;
use tokio::sync::RwLock;

use super::{not_found, ArticleStore, StoreResult};
use crate::models::article::{Article, CreateArticle, UpdateArticle};

/// Process-local [`ArticleStore`] for development and tests.
///
/// Ids start at 1 and are never reused, mirroring a BIGSERIAL column.
pub struct MemoryArticleStore {
    inner: RwLock<Inner>,
}

struct Inner {
    next_id: DbId,
    rows: BTreeMap<DbId, Article>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn list_all(&self) -> StoreResult<Vec<Article>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Article> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn insert(&self, input: &CreateArticle) -> StoreResult<Article> {
        validate_article(&input.title, &input.body)?;

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let article = Article {
            id,
            title: input.title.clone(),
            body: input.body.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(id, article.clone());
        Ok(article)
    }

    async fn mutate(&self, id: DbId, changes: &UpdateArticle) -> StoreResult<Article> {
        let mut inner = self.inner.write().await;
        let article = inner.rows.get_mut(&id).ok_or_else(|| not_found(id))?;

        let (title, body) = changes.merged_onto(article);
        validate_article(&title, &body)?;

        article.title = title;
        article.body = body;
        article.updated_at = Utc::now();
        Ok(article.clone())
    }

    async fn remove(&self, id: DbId) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
