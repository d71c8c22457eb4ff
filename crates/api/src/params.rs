//! Whitelisted article parameters.
//!
//! Requests nest article fields under an `article` key: `article[title]` and
//! `article[body]` in HTML forms, `{"article": {"title", "body"}}` in JSON.
//! Only `title` and `body` are read; serde drops every other key, so fields
//! like `id` or `created_at` can never reach the store.

use gazette_db::models::article::{CreateArticle, UpdateArticle};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

const MISSING_ARTICLE: &str = "param is missing or the value is empty: article";

/// The permitted article fields, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleParams {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ArticleParams {
    /// Fields for an insert. Absent fields become empty and fail validation.
    pub fn into_create(self) -> CreateArticle {
        CreateArticle {
            title: self.title.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
        }
    }

    /// Fields for a partial update. Absent fields keep their stored value.
    pub fn into_update(self) -> UpdateArticle {
        UpdateArticle {
            title: self.title,
            body: self.body,
        }
    }
}

/// JSON request body: `{"article": {...}}`.
#[derive(Debug, Deserialize)]
pub struct ArticleEnvelope {
    article: Option<ArticleParams>,
}

impl ArticleEnvelope {
    /// The nested params, or 400 if `article` is absent, null, or carries
    /// neither permitted field.
    pub fn require(self) -> AppResult<ArticleParams> {
        match self.article {
            Some(params) if params.title.is_some() || params.body.is_some() => Ok(params),
            _ => Err(AppError::BadRequest(MISSING_ARTICLE.to_string())),
        }
    }
}

/// URL-encoded HTML form body.
///
/// `_method` lets a browser `POST` stand in for `PATCH`, `PUT`, or `DELETE`.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleFormInput {
    #[serde(rename = "_method")]
    pub method: Option<String>,
    #[serde(rename = "article[title]")]
    pub title: Option<String>,
    #[serde(rename = "article[body]")]
    pub body: Option<String>,
}

impl ArticleFormInput {
    /// The article fields, or 400 if the form carried none.
    pub fn require(self) -> AppResult<ArticleParams> {
        if self.title.is_none() && self.body.is_none() {
            return Err(AppError::BadRequest(MISSING_ARTICLE.to_string()));
        }
        Ok(ArticleParams {
            title: self.title,
            body: self.body,
        })
    }
}
