//! Route definitions for the article resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{api_articles, articles};
use crate::state::AppState;

/// HTML routes, mounted at the root.
///
/// ```text
/// GET    /                      -> redirect to /articles
/// GET    /articles              -> index
/// POST   /articles              -> create
/// GET    /articles/new          -> new
/// GET    /articles/{id}         -> show
/// PATCH  /articles/{id}         -> update
/// PUT    /articles/{id}         -> update
/// DELETE /articles/{id}         -> destroy
/// POST   /articles/{id}         -> update or destroy, per `_method`
/// GET    /articles/{id}/edit    -> edit
/// ```
pub fn html_router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::root))
        .route("/articles", get(articles::index).post(articles::create))
        .route("/articles/new", get(articles::new))
        .route(
            "/articles/{id}",
            get(articles::show)
                .patch(articles::update)
                .put(articles::update)
                .delete(articles::destroy)
                .post(articles::override_method),
        )
        .route("/articles/{id}/edit", get(articles::edit))
}

/// JSON routes, nested under `/api/v1`.
///
/// ```text
/// GET    /articles              -> list
/// POST   /articles              -> create
/// GET    /articles/new          -> new
/// GET    /articles/{id}         -> get_by_id
/// PUT    /articles/{id}         -> update
/// PATCH  /articles/{id}         -> update
/// DELETE /articles/{id}         -> delete
/// GET    /articles/{id}/edit    -> edit
/// ```
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/articles",
            get(api_articles::list).post(api_articles::create),
        )
        .route("/articles/new", get(api_articles::new))
        .route(
            "/articles/{id}",
            get(api_articles::get_by_id)
                .put(api_articles::update)
                .patch(api_articles::update)
                .delete(api_articles::delete),
        )
        .route("/articles/{id}/edit", get(api_articles::edit))
}
