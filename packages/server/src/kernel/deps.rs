//! Server dependencies shared by request handlers and activities.

use sqlx::PgPool;

use crate::Config;

/// Dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Optional cap on search results, applied after ordering
    pub search_max_results: Option<usize>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, search_max_results: Option<usize>) -> Self {
        Self {
            db_pool,
            search_max_results,
        }
    }

    pub fn from_config(db_pool: PgPool, config: &Config) -> Self {
        Self::new(db_pool, config.search_max_results)
    }
}
