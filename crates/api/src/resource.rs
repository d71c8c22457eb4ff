//! The article resource: list, show, new, create, edit, update, delete.
//!
//! Every operation maps a [`RequestContext`] plus typed inputs to a [`Reply`]
//! and touches storage only through [`ArticleStore`]. Replies are rendered
//! as HTML by [`crate::views`] and as JSON by
//! [`crate::handlers::api_articles`].

use axum::http::StatusCode;
use gazette_core::error::{CoreError, FieldErrors};
use gazette_core::types::DbId;
use gazette_db::models::article::Article;
use gazette_db::store::{ArticleStore, StoreError};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::request_context::RequestContext;
use crate::params::ArticleParams;

/// Path of the article collection.
pub const ARTICLES_PATH: &str = "/articles";

/// Path of a single article.
pub fn article_path(id: DbId) -> String {
    format!("{ARTICLES_PATH}/{id}")
}

// ---------------------------------------------------------------------------
// Reply types
// ---------------------------------------------------------------------------

/// The outcome of a resource operation.
#[derive(Debug)]
pub enum Reply {
    /// Render a page with the given status.
    Page {
        status: StatusCode,
        page: Page,
        notice: Option<Notice>,
    },
    /// Send the client elsewhere with a confirmation message.
    Redirect(FlashRedirect),
}

#[derive(Debug)]
pub enum Page {
    Index(Vec<Article>),
    Show(Article),
    New(ArticleForm),
    Edit(ArticleForm),
}

/// Form state: the values to show and any validation messages.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleForm {
    /// `None` for a new article.
    pub id: Option<DbId>,
    pub title: String,
    pub body: String,
    pub errors: FieldErrors,
    pub error_messages: Vec<String>,
}

impl ArticleForm {
    pub fn blank() -> Self {
        Self::with_errors(None, String::new(), String::new(), FieldErrors::new())
    }

    pub fn for_article(article: &Article) -> Self {
        Self::with_errors(
            Some(article.id),
            article.title.clone(),
            article.body.clone(),
            FieldErrors::new(),
        )
    }

    fn with_errors(id: Option<DbId>, title: String, body: String, errors: FieldErrors) -> Self {
        let error_messages = errors.full_messages();
        Self {
            id,
            title,
            body,
            errors,
            error_messages,
        }
    }
}

/// Which mutation a redirect confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
}

impl Notice {
    /// The token carried in a redirect's `?notice=` parameter.
    pub fn key(self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
        }
    }

    /// Inverse of [`Notice::key`]. Anything else is not a notice.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "created" => Some(Notice::Created),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Created => "Artículo creado con éxito.",
            Notice::Updated => "Artículo actualizado con éxito.",
            Notice::Deleted => "Artículo eliminado con éxito.",
        }
    }
}

/// A redirect carrying its flash notice key in the target's query string.
#[derive(Debug)]
pub struct FlashRedirect {
    pub status: StatusCode,
    pub location: String,
    pub notice: Notice,
    /// The affected article, absent after a delete.
    pub article: Option<Article>,
}

impl FlashRedirect {
    fn see_other(location: String, notice: Notice, article: Option<Article>) -> Self {
        Self {
            status: StatusCode::SEE_OTHER,
            location,
            notice,
            article,
        }
    }

    /// `location` with the notice key appended as `?notice=...`.
    pub fn target(&self) -> String {
        format!("{}?notice={}", self.location, self.notice.key())
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Request handling for articles over any [`ArticleStore`].
pub struct ArticleResource<'a> {
    store: &'a dyn ArticleStore,
}

impl<'a> ArticleResource<'a> {
    pub fn new(store: &'a dyn ArticleStore) -> Self {
        Self { store }
    }

    /// All articles.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Reply> {
        let articles = self.store.list_all().await?;
        Ok(page(ctx, StatusCode::OK, Page::Index(articles)))
    }

    pub async fn show(&self, ctx: &RequestContext, id: DbId) -> AppResult<Reply> {
        let article = self.store.get_by_id(id).await?;
        Ok(page(ctx, StatusCode::OK, Page::Show(article)))
    }

    /// An empty form.
    pub fn new_form(&self, ctx: &RequestContext) -> Reply {
        page(ctx, StatusCode::OK, Page::New(ArticleForm::blank()))
    }

    /// Insert, then redirect to the new article. On validation failure the
    /// submitted values come back in a 422 form.
    pub async fn create(&self, ctx: &RequestContext, params: ArticleParams) -> AppResult<Reply> {
        let input = params.into_create();

        match self.store.insert(&input).await {
            Ok(article) => {
                tracing::info!(
                    article_id = article.id,
                    request_id = ctx.request_id.as_deref(),
                    "Article created"
                );
                Ok(Reply::Redirect(FlashRedirect::see_other(
                    article_path(article.id),
                    Notice::Created,
                    Some(article),
                )))
            }
            Err(StoreError::Core(CoreError::Invalid(errors))) => {
                log_rejected(ctx, None, &errors);
                let form = ArticleForm::with_errors(None, input.title, input.body, errors);
                Ok(page(ctx, StatusCode::UNPROCESSABLE_ENTITY, Page::New(form)))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The stored article in a form.
    pub async fn edit_form(&self, ctx: &RequestContext, id: DbId) -> AppResult<Reply> {
        let article = self.store.get_by_id(id).await?;
        Ok(page(
            ctx,
            StatusCode::OK,
            Page::Edit(ArticleForm::for_article(&article)),
        ))
    }

    /// Apply the submitted fields, then redirect to the article. On
    /// validation failure the record is untouched and the form shows the
    /// stored values overlaid with the submitted ones, with status 422.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DbId,
        params: ArticleParams,
    ) -> AppResult<Reply> {
        let current = self.store.get_by_id(id).await?;
        let changes = params.into_update();

        match self.store.mutate(id, &changes).await {
            Ok(article) => {
                tracing::info!(
                    article_id = article.id,
                    request_id = ctx.request_id.as_deref(),
                    "Article updated"
                );
                Ok(Reply::Redirect(FlashRedirect::see_other(
                    article_path(article.id),
                    Notice::Updated,
                    Some(article),
                )))
            }
            Err(StoreError::Core(CoreError::Invalid(errors))) => {
                log_rejected(ctx, Some(id), &errors);
                let (title, body) = changes.merged_onto(&current);
                let form = ArticleForm::with_errors(Some(id), title, body, errors);
                Ok(page(ctx, StatusCode::UNPROCESSABLE_ENTITY, Page::Edit(form)))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Remove the article, then redirect to the list.
    pub async fn delete(&self, ctx: &RequestContext, id: DbId) -> AppResult<Reply> {
        let article = self.store.get_by_id(id).await?;
        self.store.remove(article.id).await?;

        tracing::info!(
            article_id = id,
            request_id = ctx.request_id.as_deref(),
            "Article deleted"
        );
        Ok(Reply::Redirect(FlashRedirect::see_other(
            ARTICLES_PATH.to_string(),
            Notice::Deleted,
            None,
        )))
    }
}

fn page(ctx: &RequestContext, status: StatusCode, page: Page) -> Reply {
    Reply::Page {
        status,
        page,
        notice: ctx.notice,
    }
}

fn log_rejected(ctx: &RequestContext, article_id: Option<DbId>, errors: &FieldErrors) {
    let fields: Vec<_> = errors.fields().collect();
    tracing::debug!(
        article_id,
        request_id = ctx.request_id.as_deref(),
        ?fields,
        "Article rejected by validation"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
