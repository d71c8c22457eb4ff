//! Shared query parameter types for handlers.

use serde::Deserialize;

/// Flash notice key carried on a redirect target (`?notice=created`).
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
}
