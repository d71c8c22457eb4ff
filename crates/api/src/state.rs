use std::sync::Arc;

use gazette_db::store::ArticleStore;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Article persistence (PostgreSQL or in-memory).
    pub store: Arc<dyn ArticleStore>,
    /// Compiled HTML templates.
    pub views: Arc<Views>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
