//! Article entity model and DTOs.

use gazette_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An article row from the `articles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub body: String,
}

/// DTO for updating an existing article. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl UpdateArticle {
    /// The title and body `article` would have after applying this update.
    pub fn merged_onto(&self, article: &Article) -> (String, String) {
        (
            self.title.clone().unwrap_or_else(|| article.title.clone()),
            self.body.clone().unwrap_or_else(|| article.body.clone()),
        )
    }
}
