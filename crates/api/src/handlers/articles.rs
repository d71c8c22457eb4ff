//! HTML handlers for `/articles`.

use axum::extract::{Path, State};
use axum::response::{Redirect, Response};
use axum::Form;
use gazette_core::types::DbId;

use crate::error::AppError;
use crate::middleware::request_context::RequestContext;
use crate::params::ArticleFormInput;
use crate::resource::{article_path, ArticleResource, ARTICLES_PATH};
use crate::state::AppState;

/// GET /
pub async fn root() -> Redirect {
    Redirect::to(ARTICLES_PATH)
}

/// GET /articles
pub async fn index(State(state): State<AppState>, ctx: RequestContext) -> Response {
    let result = ArticleResource::new(state.store.as_ref()).list(&ctx).await;
    state.views.respond(result)
}

/// GET /articles/{id}
pub async fn show(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> Response {
    let result = ArticleResource::new(state.store.as_ref())
        .show(&ctx, id)
        .await;
    state.views.respond(result)
}

/// GET /articles/new
pub async fn new(State(state): State<AppState>, ctx: RequestContext) -> Response {
    let reply = ArticleResource::new(state.store.as_ref()).new_form(&ctx);
    state.views.render_reply(reply)
}

/// POST /articles
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(input): Form<ArticleFormInput>,
) -> Response {
    let resource = ArticleResource::new(state.store.as_ref());
    let result = match input.require() {
        Ok(params) => resource.create(&ctx, params).await,
        Err(err) => Err(err),
    };
    state.views.respond(result)
}

/// GET /articles/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> Response {
    let result = ArticleResource::new(state.store.as_ref())
        .edit_form(&ctx, id)
        .await;
    state.views.respond(result)
}

/// PATCH | PUT /articles/{id}
pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
    Form(input): Form<ArticleFormInput>,
) -> Response {
    let resource = ArticleResource::new(state.store.as_ref());
    let result = match input.require() {
        Ok(params) => resource.update(&ctx, id, params).await,
        Err(err) => Err(err),
    };
    state.views.respond(result)
}

/// DELETE /articles/{id}
pub async fn destroy(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> Response {
    let result = ArticleResource::new(state.store.as_ref())
        .delete(&ctx, id)
        .await;
    state.views.respond(result)
}

/// POST /articles/{id}
///
/// Browser forms cannot send PATCH or DELETE, so the verb travels in the
/// `_method` field instead.
pub async fn override_method(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
    Form(mut input): Form<ArticleFormInput>,
) -> Response {
    let method = input.method.take().unwrap_or_default().to_ascii_lowercase();
    let resource = ArticleResource::new(state.store.as_ref());

    let result = match method.as_str() {
        "patch" | "put" => match input.require() {
            Ok(params) => resource.update(&ctx, id, params).await,
            Err(err) => Err(err),
        },
        "delete" => resource.delete(&ctx, id).await,
        other => Err(AppError::MethodNotAllowed(format!(
            "POST {} does not support _method={other:?}",
            article_path(id)
        ))),
    };
    state.views.respond(result)
}
