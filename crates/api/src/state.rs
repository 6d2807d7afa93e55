use std::sync::Arc;

use crate::config::ServerConfig;
use crate::metrics::HttpMetrics;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gorello_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// HTTP request counters exposed at `/metrics`.
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    pub fn new(pool: gorello_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            metrics: Arc::new(HttpMetrics::default()),
        }
    }
}
