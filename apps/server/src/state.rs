//! Shared application state.

use mesa_db::Database;

/// State handed to every handler.
///
/// [`Database`] is a thin wrapper around a connection pool, so cloning the
/// state per-request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
