//! Database module: pool construction, row models, and schema.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL per backend (SQLite, MySQL)
//! - `store.rs`: the `users` table access used by the score service
//! - `content.rs`: `sentences` / `dialogues` access used by the content service

pub mod content;
pub mod models;
pub mod schema;
pub mod store;

pub use content::ContentStore;
pub use models::{
    DialogueRow, DialogueSummary, LeaderboardEntry, ProbeUser, Sentence, SentenceRecord, User,
};
pub use schema::Backend;
pub use store::UserStore;

use crate::error::TaaltorenError;
use sqlx::any::AnyPoolOptions;
use tracing::{debug, info};

pub type DbPool = sqlx::AnyPool;

/// Open a connection pool for `database_url`.
///
/// Connections are acquired per statement and returned to the pool afterwards.
/// For `sqlite::memory:` pass `max_connections = 1`: every connection would
/// otherwise see its own empty database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DbPool, TaaltorenError> {
    let backend = Backend::from_url(database_url)?;
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections.max(1))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await?;
    info!(backend = ?backend, max_connections, "database pool ready");
    Ok(pool)
}

/// Run `SELECT 1` to check the pool can reach the database.
pub async fn ping(pool: &DbPool) -> Result<(), TaaltorenError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    debug!("database ping ok");
    Ok(())
}

/// Execute each statement of a bundled DDL script.
pub async fn apply_ddl(pool: &DbPool, ddl: &str) -> Result<(), TaaltorenError> {
    // sqlx::query runs one statement at a time
    for stmt in ddl.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
