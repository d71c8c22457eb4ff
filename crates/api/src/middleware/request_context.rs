//! Per-request context passed explicitly into every resource operation.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::query::NoticeParams;
use crate::resource::Notice;

/// Header set by the request-id middleware in [`crate::router`].
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// What an operation may know about the request beyond its typed inputs.
///
/// ```ignore
/// async fn show(ctx: RequestContext, Path(id): Path<DbId>) -> Response {
///     tracing::info!(request_id = ctx.request_id.as_deref(), id, "showing");
///     ...
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Value of the `x-request-id` header, when present.
    pub request_id: Option<String>,
    /// Flash notice named by the `notice` query parameter. Unknown keys
    /// are dropped, so a crafted link cannot put its own text on the page.
    pub notice: Option<Notice>,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        // A malformed query string just means there is no notice.
        let notice = Query::<NoticeParams>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.notice)
            .and_then(|key| Notice::from_key(&key));

        Ok(RequestContext { request_id, notice })
    }
}
