//! The persistence interface the HTTP layer talks to.
//!
//! [`ArticleStore`] is the seam between request handling and storage. Both
//! implementations validate records with
//! [`validate_article`](gazette_core::article::validate_article) before
//! writing, so a rejected insert or mutate leaves storage untouched.

use async_trait::async_trait;
use gazette_core::article::ENTITY;
use gazette_core::error::CoreError;
use gazette_core::types::DbId;

use crate::models::article::{Article, CreateArticle, UpdateArticle};

mod memory;
mod postgres;

pub use memory::MemoryArticleStore;
pub use postgres::PgArticleStore;

/// Errors returned by [`ArticleStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Not found or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD access to articles by identifier.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Every stored article, ordered by id.
    async fn list_all(&self) -> StoreResult<Vec<Article>>;

    /// Fails with [`CoreError::NotFound`] if `id` does not resolve.
    async fn get_by_id(&self, id: DbId) -> StoreResult<Article>;

    /// Validate and persist a new article; the store assigns its id.
    async fn insert(&self, input: &CreateArticle) -> StoreResult<Article>;

    /// Apply `changes` to an existing article after validating the result.
    async fn mutate(&self, id: DbId, changes: &UpdateArticle) -> StoreResult<Article>;

    async fn remove(&self, id: DbId) -> StoreResult<()>;

    /// Check the backing storage is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

pub(crate) fn not_found(id: DbId) -> StoreError {
    StoreError::Core(CoreError::NotFound { entity: ENTITY, id })
}
