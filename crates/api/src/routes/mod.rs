pub mod articles;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Mount point of the JSON API.
pub const API_PREFIX: &str = "/api/v1";

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles                    list, create
/// /articles/new                blank form
/// /articles/{id}               get, update (PUT/PATCH), delete
/// /articles/{id}/edit          form for an existing article
/// ```
pub fn api_routes() -> Router<AppState> {
    articles::api_router()
}
