use async_trait::async_trait;
use gazette_core::article::validate_article;
use gazette_core::types::DbId;

use super::{not_found, ArticleStore, StoreResult};
use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// [`ArticleStore`] backed by the `articles` table.
#[derive(Clone)]
pub struct PgArticleStore {
    pool: DbPool,
}

impl PgArticleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list_all(&self) -> StoreResult<Vec<Article>> {
        Ok(ArticleRepo::list(&self.pool).await?)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Article> {
        ArticleRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn insert(&self, input: &CreateArticle) -> StoreResult<Article> {
        validate_article(&input.title, &input.body)?;
        Ok(ArticleRepo::create(&self.pool, input).await?)
    }

    async fn mutate(&self, id: DbId, changes: &UpdateArticle) -> StoreResult<Article> {
        let current = self.get_by_id(id).await?;
        let (title, body) = changes.merged_onto(&current);
        validate_article(&title, &body)?;

        // The row can disappear between the read and the write.
        ArticleRepo::update(&self.pool, id, changes)
            .await?
            .ok_or_else(|| {
                tracing::warn!(article_id = id, "Article deleted while being updated");
                not_found(id)
            })
    }

    async fn remove(&self, id: DbId) -> StoreResult<()> {
        if ArticleRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
