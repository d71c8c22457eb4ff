//! Request extractors shared by every article handler.
//!
//! - [`request_context::RequestContext`] -- request id and flash notice.

pub mod request_context;
