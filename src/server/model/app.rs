use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::DEFAULT_EXPIRY_WINDOW_DAYS, service::cache::DatasetCache};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Loaded dataset, invalidated after every write
    pub cache: Arc<DatasetCache>,
    /// Days ahead of today covered by the contract expiry report
    pub expiry_window_days: i64,
}

impl AppState {
    /// Creates state with an empty cache.
    pub fn new(db: DatabaseConnection, expiry_window_days: i64) -> Self {
        Self {
            db,
            cache: Arc::new(DatasetCache::new()),
            expiry_window_days,
        }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, DEFAULT_EXPIRY_WINDOW_DAYS)
    }
}
