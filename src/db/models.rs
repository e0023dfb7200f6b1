use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub points: i64,
}

/// Projection served by `GET /leaderboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct LeaderboardEntry {
    pub username: String,
    pub points: i64,
}

/// Row of the `user` table declared by the connectivity-check service.
/// Nothing reads or writes it; only the table is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ProbeUser {
    pub id: i64,
    pub name: Option<String>,
}

/// One sentence as served to players.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Sentence {
    pub id: i64,
    pub text: String,
    pub level: String,
}

/// Sentence row in the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct SentenceRecord {
    pub id: i64,
    pub text: String,
    pub level: String,
    pub created_at: String,
}

/// Dialogue row in the public listing; the body is left out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DialogueSummary {
    pub id: i64,
    pub title: String,
    pub level: String,
    pub created_at: String,
}

/// Full dialogue row; `body` is the stored JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DialogueRow {
    pub id: i64,
    pub title: String,
    pub level: String,
    pub body: String,
}
