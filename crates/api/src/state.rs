use std::sync::Arc;

use crate::cache::ContentCache;
use crate::config::ServerConfig;
use crate::manager::ContentManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: medialib_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Business layer over the content repository.
    pub manager: ContentManager,
    /// Process-wide content cache, constructed once at the composition root
    /// and shared by reference -- never an ambient global.
    pub cache: Arc<ContentCache>,
}
