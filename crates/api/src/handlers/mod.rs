//! Request handlers for the article resource.
//!
//! Both modules drive the same [`ArticleResource`](crate::resource::ArticleResource)
//! operations and differ only in how they read input and render replies.

pub mod api_articles;
pub mod articles;
