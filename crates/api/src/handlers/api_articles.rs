//! JSON handlers for `/api/v1/articles`.
//!
//! Same operations as the HTML handlers; replies are rendered with the
//! `{ "data": ... }` envelope instead of templates.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use gazette_core::types::DbId;
use gazette_db::models::article::Article;
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::request_context::RequestContext;
use crate::params::ArticleEnvelope;
use crate::resource::{ArticleResource, FlashRedirect, Notice, Page, Reply};
use crate::response::{DataResponse, NoticeResponse};
use crate::routes::API_PREFIX;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/articles
pub async fn list(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let reply = ArticleResource::new(state.store.as_ref()).list(&ctx).await?;
    Ok(json_reply(reply))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let reply = ArticleResource::new(state.store.as_ref())
        .show(&ctx, id)
        .await?;
    Ok(json_reply(reply))
}

/// GET /api/v1/articles/new
///
/// The blank form a client should fill in.
pub async fn new(State(state): State<AppState>, ctx: RequestContext) -> Response {
    json_reply(ArticleResource::new(state.store.as_ref()).new_form(&ctx))
}

/// POST /api/v1/articles
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(envelope): Json<ArticleEnvelope>,
) -> AppResult<Response> {
    let params = envelope.require()?;
    let reply = ArticleResource::new(state.store.as_ref())
        .create(&ctx, params)
        .await?;
    Ok(json_reply(reply))
}

/// GET /api/v1/articles/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let reply = ArticleResource::new(state.store.as_ref())
        .edit_form(&ctx, id)
        .await?;
    Ok(json_reply(reply))
}

/// PUT | PATCH /api/v1/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
    Json(envelope): Json<ArticleEnvelope>,
) -> AppResult<Response> {
    let params = envelope.require()?;
    let reply = ArticleResource::new(state.store.as_ref())
        .update(&ctx, id, params)
        .await?;
    Ok(json_reply(reply))
}

/// DELETE /api/v1/articles/{id}
pub async fn delete(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let reply = ArticleResource::new(state.store.as_ref())
        .delete(&ctx, id)
        .await?;
    Ok(json_reply(reply))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn json_reply(reply: Reply) -> Response {
    match reply {
        Reply::Redirect(redirect) => json_redirect(redirect),
        Reply::Page { status, page, .. } => match page {
            Page::Index(articles) => (status, Json(DataResponse { data: articles })).into_response(),
            Page::Show(article) => (status, Json(DataResponse { data: article })).into_response(),
            Page::New(form) | Page::Edit(form) if status == StatusCode::UNPROCESSABLE_ENTITY => {
                let body = json!({
                    "error": form.error_messages.join(", "),
                    "code": "VALIDATION_ERROR",
                    "fields": form.errors,
                    "data": form,
                });
                (status, Json(body)).into_response()
            }
            Page::New(form) | Page::Edit(form) => {
                (status, Json(DataResponse { data: form })).into_response()
            }
        },
    }
}

/// Mutations answer in place rather than redirecting: 201 with `Location`
/// for a create, 200 otherwise.
fn json_redirect(redirect: FlashRedirect) -> Response {
    let body = NoticeResponse::<Article> {
        data: redirect.article,
        notice: redirect.notice.message(),
    };

    match redirect.notice {
        Notice::Created => {
            let location = format!("{API_PREFIX}{}", redirect.location);
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
        }
        Notice::Updated | Notice::Deleted => (StatusCode::OK, Json(body)).into_response(),
    }
}
