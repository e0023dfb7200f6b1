//! SQL DDL for the two services, per supported backend.

use crate::error::TaaltorenError;

/// Longest `name` accepted by the probe's `user` table.
pub const PROBE_NAME_MAX_LEN: usize = 50;

/// `users` table:
/// - `id` auto-increment primary key
/// - `username` / `password` stored as given; no UNIQUE constraint
/// - `points` defaults to 0; on SQLite it must stay an integer, since an
///   overflowing `points + ?` would otherwise be stored as REAL
pub const SQLITE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL,
    points BIGINT NOT NULL DEFAULT 0 CHECK (typeof(points) = 'integer')
);

CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);
"#;

pub const MYSQL_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGINT PRIMARY KEY AUTO_INCREMENT,
    username VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL,
    points BIGINT NOT NULL DEFAULT 0,
    INDEX idx_users_username (username)
) DEFAULT CHARSET = utf8mb4
"#;

pub const SQLITE_PROBE_USER: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(50) NULL
)
"#;

pub const MYSQL_PROBE_USER: &str = r#"
CREATE TABLE IF NOT EXISTS `user` (
    id BIGINT PRIMARY KEY AUTO_INCREMENT,
    name VARCHAR(50) NULL
) DEFAULT CHARSET = utf8mb4
"#;

/// `sentences` and `dialogues` tables of the content service. `dialogues.body`
/// holds a JSON array serialized as text.
pub const SQLITE_CONTENT: &str = r#"
CREATE TABLE IF NOT EXISTS sentences (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    level VARCHAR(16) NOT NULL DEFAULT 'A1',
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_sentences_level ON sentences(level);

CREATE TABLE IF NOT EXISTS dialogues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(255) NOT NULL,
    level VARCHAR(16) NOT NULL DEFAULT 'A1',
    body TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

pub const MYSQL_CONTENT: &str = r#"
CREATE TABLE IF NOT EXISTS sentences (
    id BIGINT PRIMARY KEY AUTO_INCREMENT,
    text TEXT NOT NULL,
    level VARCHAR(16) NOT NULL DEFAULT 'A1',
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    INDEX idx_sentences_level (level)
) DEFAULT CHARSET = utf8mb4;

CREATE TABLE IF NOT EXISTS dialogues (
    id BIGINT PRIMARY KEY AUTO_INCREMENT,
    title VARCHAR(255) NOT NULL,
    level VARCHAR(16) NOT NULL DEFAULT 'A1',
    body MEDIUMTEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
) DEFAULT CHARSET = utf8mb4
"#;

/// Database flavour, picked from the connection string scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    MySql,
}

impl Backend {
    pub fn from_url(database_url: &str) -> Result<Self, TaaltorenError> {
        let scheme = database_url
            .split_once(':')
            .map(|(s, _)| s.to_ascii_lowercase())
            .unwrap_or_default();
        match scheme.as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "mysql" | "mariadb" => Ok(Backend::MySql),
            _ => Err(TaaltorenError::UnsupportedDatabase(scheme)),
        }
    }

    pub fn users_ddl(self) -> &'static str {
        match self {
            Backend::Sqlite => SQLITE_USERS,
            Backend::MySql => MYSQL_USERS,
        }
    }

    pub fn probe_user_ddl(self) -> &'static str {
        match self {
            Backend::Sqlite => SQLITE_PROBE_USER,
            Backend::MySql => MYSQL_PROBE_USER,
        }
    }

    pub fn content_ddl(self) -> &'static str {
        match self {
            Backend::Sqlite => SQLITE_CONTENT,
            Backend::MySql => MYSQL_CONTENT,
        }
    }

    /// SQL function yielding a random value, for `ORDER BY ... LIMIT 1` picks.
    pub fn random_fn(self) -> &'static str {
        match self {
            Backend::Sqlite => "RANDOM()",
            Backend::MySql => "RAND()",
        }
    }
}
