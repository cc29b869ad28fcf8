//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<str>` is a reference-counted pointer to the admin secret
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Secret compared against the bearer token of admin requests.
    pub admin_token: Arc<str>,

    /// Whether `DATABASE_URL` was provided, reported by the diagnostics endpoint.
    pub database_url_set: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admin_token` - Secret used by the admin guard
    /// - `database_url_set` - Whether the database URL came from the environment
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        admin_token: impl Into<Arc<str>>,
        database_url_set: bool,
    ) -> Self {
        Self {
            db,
            admin_token: admin_token.into(),
            database_url_set,
        }
    }
}
