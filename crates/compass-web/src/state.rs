//! Application state.

use compass_db::DbPool;
use std::path::PathBuf;

/// Application state shared across handlers.
///
/// The database handle is optional: when Redis is unreachable at startup the
/// service keeps running and the health endpoint reports "disconnected".
#[derive(Clone)]
pub struct AppState {
    pub db: Option<DbPool>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(db: Option<DbPool>, static_dir: PathBuf) -> Self {
        Self { db, static_dir }
    }
}
