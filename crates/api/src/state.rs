use std::sync::Arc;

use crate::config::ServerConfig;
use crate::proxy::ImageProxy;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sill_db::DbPool,
    /// Server configuration (upload directory, limits).
    pub config: Arc<ServerConfig>,
    /// Remote image fetcher with its in-memory cache.
    pub image_proxy: Arc<ImageProxy>,
}
