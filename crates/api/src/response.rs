//! Shared response envelope types for the JSON API.
//!
//! All JSON responses use a `{ "data": ... }` envelope. Mutations also carry
//! the confirmation `notice` shown to HTML users.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "notice": "..." }` returned by create and update.
#[derive(Debug, Serialize)]
pub struct NoticeResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub notice: &'static str,
}
