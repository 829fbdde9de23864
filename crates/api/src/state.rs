use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (the pool is already `Clone`, config sits behind an
/// `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pawmatch_db::DbPool,
    /// Server configuration (bind address, CORS, JWT settings).
    pub config: Arc<ServerConfig>,
}
