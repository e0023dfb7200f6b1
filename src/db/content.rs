use crate::db::models::{DialogueRow, DialogueSummary, Sentence, SentenceRecord};
use crate::db::schema::Backend;
use crate::db::{DbPool, apply_ddl};
use crate::error::TaaltorenError;

/// Access to the `sentences` and `dialogues` tables.
#[derive(Clone)]
pub struct ContentStore {
    pool: DbPool,
    backend: Backend,
}

impl ContentStore {
    pub fn new(pool: DbPool, backend: Backend) -> Self {
        Self { pool, backend }
    }

    pub async fn init_schema(&self) -> Result<(), TaaltorenError> {
        apply_ddl(&self.pool, self.backend.content_ddl()).await
    }

    /// One sentence of `level` picked at random, if any exist.
    pub async fn random_sentence(&self, level: &str) -> Result<Option<Sentence>, TaaltorenError> {
        let sql = format!(
            "SELECT id, text, level FROM sentences WHERE level = ? ORDER BY {} LIMIT 1",
            self.backend.random_fn()
        );
        let row = sqlx::query_as::<_, Sentence>(&sql)
            .bind(level)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// All sentences, newest first.
    pub async fn list_sentences(&self) -> Result<Vec<SentenceRecord>, TaaltorenError> {
        // CAST AS CHAR reads TIMESTAMP (MySQL) and TEXT (SQLite) as a string.
        let rows = sqlx::query_as::<_, SentenceRecord>(
            "SELECT id, text, level, CAST(created_at AS CHAR) AS created_at
             FROM sentences ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Returns the new row id.
    pub async fn create_sentence(&self, text: &str, level: &str) -> Result<i64, TaaltorenError> {
        let result = sqlx::query("INSERT INTO sentences (text, level) VALUES (?, ?)")
            .bind(text)
            .bind(level)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id().unwrap_or_default())
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete_sentence(&self, id: i64) -> Result<(), TaaltorenError> {
        sqlx::query("DELETE FROM sentences WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All dialogues without their bodies, newest first.
    pub async fn list_dialogues(&self) -> Result<Vec<DialogueSummary>, TaaltorenError> {
        let rows = sqlx::query_as::<_, DialogueSummary>(
            "SELECT id, title, level, CAST(created_at AS CHAR) AS created_at
             FROM dialogues ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_dialogue(&self, id: i64) -> Result<Option<DialogueRow>, TaaltorenError> {
        let row = sqlx::query_as::<_, DialogueRow>(
            "SELECT id, title, level, body FROM dialogues WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Returns the new row id.
    pub async fn create_dialogue(
        &self,
        title: &str,
        level: &str,
        body_json: &str,
    ) -> Result<i64, TaaltorenError> {
        let result = sqlx::query("INSERT INTO dialogues (title, level, body) VALUES (?, ?, ?)")
            .bind(title)
            .bind(level)
            .bind(body_json)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id().unwrap_or_default())
    }

    /// Overwrite dialogue `id`. A missing row is left missing; nothing is inserted.
    pub async fn update_dialogue(
        &self,
        id: i64,
        title: &str,
        level: &str,
        body_json: &str,
    ) -> Result<(), TaaltorenError> {
        sqlx::query("UPDATE dialogues SET title = ?, level = ?, body = ? WHERE id = ?")
            .bind(title)
            .bind(level)
            .bind(body_json)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_dialogue(&self, id: i64) -> Result<(), TaaltorenError> {
        sqlx::query("DELETE FROM dialogues WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
